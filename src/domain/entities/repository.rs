use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A checkout known by name
///
/// `name` is the key two inventories are matched on, `location` is where the
/// working tree lives on disk. Snapshots written by older versions stored the
/// location under `path`, which is still accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RepositoryRecord")]
pub struct Repository {
    /// Directory base name of the checkout
    pub name: String,

    /// Absolute path of the working tree
    pub location: PathBuf,
}

/// On-disk shape of a record; `location` wins when both keys are present
#[derive(Deserialize)]
struct RepositoryRecord {
    name: String,
    location: Option<PathBuf>,
    path: Option<PathBuf>,
}

impl TryFrom<RepositoryRecord> for Repository {
    type Error = String;

    fn try_from(record: RepositoryRecord) -> Result<Self, Self::Error> {
        match record.location.or(record.path) {
            Some(location) => Ok(Self::new(record.name, location)),
            None => Err(format!("repository '{}' has no location", record.name)),
        }
    }
}

impl Repository {
    /// Create a new repository record
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Build a record from a checkout directory, naming it after the directory
    pub fn from_checkout(location: &Path) -> Option<Self> {
        let name = location.file_name()?.to_str()?;
        Some(Self::new(name, location))
    }

    /// Directory that contains the checkout
    pub fn parent_dir(&self) -> Option<&Path> {
        self.location.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location.display())
    }
}

use super::repository::Repository;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building an inventory
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Repository '{name}' appears at two locations: {first} and {second}")]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Name-keyed set of repositories
///
/// Backed by a `BTreeMap`, so iteration is always sorted by name. Each name
/// maps to exactly one location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    repos: BTreeMap<String, Repository>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from records, rejecting a name seen at two locations
    ///
    /// Exact duplicates collapse into a single entry.
    pub fn from_records(
        records: impl IntoIterator<Item = Repository>,
    ) -> Result<Self, InventoryError> {
        let mut inventory = Self::new();
        for repo in records {
            inventory.insert(repo)?;
        }
        Ok(inventory)
    }

    /// Insert a record, failing if its name is already bound elsewhere
    pub fn insert(&mut self, repo: Repository) -> Result<(), InventoryError> {
        if let Some(existing) = self.repos.get(&repo.name) {
            if existing.location != repo.location {
                return Err(InventoryError::DuplicateName {
                    name: repo.name,
                    first: existing.location.clone(),
                    second: repo.location,
                });
            }
            return Ok(());
        }
        self.repos.insert(repo.name.clone(), repo);
        Ok(())
    }

    /// Merge two inventories, moving both into a new one
    pub fn merge(self, other: Inventory) -> Result<Self, InventoryError> {
        let mut merged = self;
        for repo in other.into_iter() {
            merged.insert(repo)?;
        }
        Ok(merged)
    }

    /// Look up a repository by name
    pub fn get(&self, name: &str) -> Option<&Repository> {
        self.repos.get(name)
    }

    /// Whether a repository with this name is present
    pub fn contains(&self, name: &str) -> bool {
        self.repos.contains_key(name)
    }

    /// Records whose names are absent from `other`, sorted by name
    pub fn missing_from<'a>(&'a self, other: &'a Inventory) -> impl Iterator<Item = &'a Repository> {
        self.iter().filter(move |repo| !other.contains(&repo.name))
    }

    /// Iterate records in name order
    pub fn iter(&self) -> impl Iterator<Item = &Repository> {
        self.repos.values()
    }

    /// Names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.repos.keys().map(String::as_str)
    }

    /// Number of repositories
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    /// Whether the inventory is empty
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Records as a sorted vector, ready to serialize
    pub fn to_records(&self) -> Vec<Repository> {
        self.repos.values().cloned().collect()
    }
}

impl IntoIterator for Inventory {
    type Item = Repository;
    type IntoIter = std::collections::btree_map::IntoValues<String, Repository>;

    fn into_iter(self) -> Self::IntoIter {
        self.repos.into_values()
    }
}

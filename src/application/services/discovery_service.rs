use std::path::Path;

use crate::common::defaults::{GIT_CONFIG_FILE, GIT_DIR};
use crate::common::error::RosterError;
use crate::common::result::{ResultExt, RosterResult, RosterResultExt};
use crate::domain::entities::{Inventory, Repository};
use crate::domain::value_objects::OwnerIdentity;
use crate::infrastructure::filesystem::dir_prober::{has_git_dir, walk_directories, walk_error};

/// Finds the checkouts under a directory tree that belong to the operator
///
/// Only the topmost owned checkout of each branch of the tree is reported:
/// once a directory matches, the walk does not descend into it. Checkouts
/// owned by someone else are walked through like plain directories.
#[derive(Debug, Clone)]
pub struct DiscoveryService {
    identity: OwnerIdentity,
}

impl DiscoveryService {
    /// Create a discovery service matching checkouts against `identity`
    pub fn new(identity: OwnerIdentity) -> Self {
        Self { identity }
    }

    /// Walk `root` and return every topmost owned checkout below it
    ///
    /// A directory that cannot be listed aborts the walk. Two owned checkouts
    /// with the same directory name in different places are reported as an
    /// inventory error. This does blocking I/O.
    pub fn discover(&self, root: &Path) -> RosterResult<Inventory> {
        tracing::info!("Scanning {} for repositories", root.display());

        let mut found = Vec::new();
        let mut walk = walk_directories(root);
        while let Some(entry) = walk.next() {
            let entry = entry.map_err(walk_error)?;
            let dir = entry.path();
            if !self.is_owned_checkout(dir) {
                continue;
            }

            walk.skip_current_dir();
            match Repository::from_checkout(dir) {
                Some(repo) => {
                    tracing::debug!("Found {}", repo);
                    found.push(repo);
                }
                None => tracing::warn!(
                    "Skipping {}: directory name is not valid UTF-8",
                    dir.display()
                ),
            }
        }

        let inventory = Inventory::from_records(found).map_err(|e| {
            RosterError::inventory_error_with_source("Discovered repositories clash", e)
        })?;

        tracing::info!(
            "Found {} repositories under {}",
            inventory.len(),
            root.display()
        );
        Ok(inventory)
    }

    /// Whether `dir` holds a `.git` directory whose config names us
    fn is_owned_checkout(&self, dir: &Path) -> bool {
        if !has_git_dir(dir) {
            return false;
        }

        let config_path = dir.join(GIT_DIR).join(GIT_CONFIG_FILE);
        std::fs::read(&config_path)
            .with_filesystem_error(
                format!("Cannot read {}, treating as not owned", config_path.display()),
                Some(config_path.clone()),
            )
            .to_option_logged()
            .is_some_and(|content| self.identity.owns(&String::from_utf8_lossy(&content)))
    }
}

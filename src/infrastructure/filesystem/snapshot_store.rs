use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs as async_fs;

use super::artifact_writer::write_artifact;
use crate::common::error::RosterError;
use crate::domain::entities::{Inventory, InventoryError, Repository};

/// Snapshot store related errors
#[derive(Debug, Error)]
pub enum SnapshotStoreError {
    #[error("Snapshot file read failed for {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot file write failed for {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot file {path} is not a valid repository list: {source}")]
    JsonParsingFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization failed: {0}")]
    JsonSerializationFailed(#[source] serde_json::Error),

    #[error("Snapshot file {path} is inconsistent: {source}")]
    Inconsistent {
        path: PathBuf,
        #[source]
        source: InventoryError,
    },
}

impl SnapshotStoreError {
    fn path(&self) -> Option<PathBuf> {
        match self {
            Self::ReadFailed { path, .. }
            | Self::WriteFailed { path, .. }
            | Self::JsonParsingFailed { path, .. }
            | Self::Inconsistent { path, .. } => Some(path.clone()),
            Self::JsonSerializationFailed(_) => None,
        }
    }
}

impl From<SnapshotStoreError> for RosterError {
    fn from(error: SnapshotStoreError) -> Self {
        let path = error.path();
        RosterError::snapshot_error_with_source("Snapshot store operation failed", path, error)
    }
}

/// Persists the inventory as a JSON array of `{name, location}` objects
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted inventory
    ///
    /// A missing file yields an empty inventory. Unreadable or malformed
    /// content is an error; nothing is partially recovered.
    pub async fn load(&self) -> Result<Inventory, SnapshotStoreError> {
        let content = match async_fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "No snapshot at {} yet, starting from an empty list",
                    self.path.display()
                );
                return Ok(Inventory::new());
            }
            Err(source) => {
                return Err(SnapshotStoreError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let records: Vec<Repository> =
            serde_json::from_slice(&content).map_err(|source| {
                SnapshotStoreError::JsonParsingFailed {
                    path: self.path.clone(),
                    source,
                }
            })?;

        let inventory =
            Inventory::from_records(records).map_err(|source| SnapshotStoreError::Inconsistent {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            "Loaded {} repositories from {}",
            inventory.len(),
            self.path.display()
        );
        Ok(inventory)
    }

    /// Persist `inventory`, sorted by name
    pub async fn save(&self, inventory: &Inventory) -> Result<(), SnapshotStoreError> {
        let mut json = serde_json::to_string_pretty(&inventory.to_records())
            .map_err(SnapshotStoreError::JsonSerializationFailed)?;
        json.push('\n');

        write_artifact(&self.path, json.as_bytes())
            .await
            .map_err(|source| SnapshotStoreError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Saved {} repositories to {}",
            inventory.len(),
            self.path.display()
        );
        Ok(())
    }
}

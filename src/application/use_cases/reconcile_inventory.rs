use crate::common::error::RosterError;
use crate::domain::entities::{Inventory, InventoryError};
use crate::infrastructure::scm::RemoteSync;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One name bound to different locations in the snapshot and on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationConflict {
    /// Repository name
    pub name: String,
    /// Location remembered in the snapshot
    pub persisted: PathBuf,
    /// Location found on disk
    pub discovered: PathBuf,
}

impl fmt::Display for LocationConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is recorded at {} but found at {}",
            self.name,
            self.persisted.display(),
            self.discovered.display()
        )
    }
}

/// Reconciliation errors
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Not resolvable automatically; the caller decides what to do
    #[error("Location conflict: {}", display_conflicts(.conflicts))]
    LocationConflict { conflicts: Vec<LocationConflict> },

    #[error("Inventory merge failed: {0}")]
    MergeFailed(#[from] InventoryError),
}

fn display_conflicts(conflicts: &[LocationConflict]) -> String {
    conflicts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ReconcileError> for RosterError {
    fn from(error: ReconcileError) -> Self {
        match &error {
            ReconcileError::LocationConflict { conflicts } => {
                let names = conflicts.iter().map(|c| c.name.clone()).collect();
                RosterError::conflict_error_with_source(names, error)
            }
            ReconcileError::MergeFailed(_) => {
                RosterError::inventory_error_with_source("Reconciliation failed", error)
            }
        }
    }
}

/// Kind of remote operation attempted for a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOperation {
    /// Missing locally, cloned from the remote
    Clone,
    /// Present locally, updated from the remote
    Pull,
}

impl fmt::Display for SyncOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOperation::Clone => write!(f, "clone"),
            SyncOperation::Pull => write!(f, "pull"),
        }
    }
}

/// A remote operation that failed and was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    pub name: String,
    pub operation: SyncOperation,
    pub error: String,
}

/// Result of a reconciliation
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutcome {
    /// Union of the snapshot and the discovered repositories
    pub inventory: Inventory,

    /// Names cloned successfully
    pub cloned: Vec<String>,

    /// Names pulled successfully
    pub pulled: Vec<String>,

    /// Remote operations that failed
    pub failures: Vec<SyncFailure>,
}

impl ReconcileOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, name: &str, operation: SyncOperation, result: Result<(), String>) {
        match result {
            Ok(()) => match operation {
                SyncOperation::Clone => self.cloned.push(name.to_string()),
                SyncOperation::Pull => self.pulled.push(name.to_string()),
            },
            Err(error) => {
                tracing::warn!("{} of '{}' failed: {}", operation, name, error);
                self.failures.push(SyncFailure {
                    name: name.to_string(),
                    operation,
                    error,
                });
            }
        }
    }
}

/// Every name present in both inventories with two different locations
pub fn find_conflicts(discovered: &Inventory, persisted: &Inventory) -> Vec<LocationConflict> {
    persisted
        .iter()
        .filter_map(|remembered| {
            let found = discovered.get(&remembered.name)?;
            (found.location != remembered.location).then(|| LocationConflict {
                name: remembered.name.clone(),
                persisted: remembered.location.clone(),
                discovered: found.location.clone(),
            })
        })
        .collect()
}

/// Converges the snapshot and the filesystem
///
/// The snapshot is what should exist, the discovered inventory is what does
/// exist. Missing repositories are cloned, existing ones are pulled, and the
/// union of both becomes the new snapshot. Conflicts are checked before any
/// remote operation runs.
pub struct ReconcileInventoryUseCase<'a, R: RemoteSync + ?Sized> {
    remote: &'a R,
}

impl<'a, R: RemoteSync + ?Sized> ReconcileInventoryUseCase<'a, R> {
    pub fn new(remote: &'a R) -> Self {
        Self { remote }
    }

    pub async fn execute(
        &self,
        discovered: Inventory,
        persisted: Inventory,
    ) -> Result<ReconcileOutcome, ReconcileError> {
        let conflicts = find_conflicts(&discovered, &persisted);
        if !conflicts.is_empty() {
            return Err(ReconcileError::LocationConflict { conflicts });
        }

        let mut outcome = ReconcileOutcome::default();

        for repo in persisted.missing_from(&discovered) {
            tracing::info!("Cloning missing repository {}", repo);
            let result = self
                .remote
                .ensure_cloned(repo)
                .await
                .map_err(|e| e.to_string());
            outcome.record(&repo.name, SyncOperation::Clone, result);
        }

        for repo in discovered.iter() {
            tracing::info!("Syncing {}", repo);
            let result = self.remote.pull(repo).await.map_err(|e| e.to_string());
            outcome.record(&repo.name, SyncOperation::Pull, result);
        }

        outcome.inventory = persisted.merge(discovered)?;
        Ok(outcome)
    }
}

/// Reconcile `discovered` against `persisted` using `remote`
pub async fn reconcile<R: RemoteSync + ?Sized>(
    discovered: Inventory,
    persisted: Inventory,
    remote: &R,
) -> Result<ReconcileOutcome, ReconcileError> {
    ReconcileInventoryUseCase::new(remote)
        .execute(discovered, persisted)
        .await
}

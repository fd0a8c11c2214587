use std::path::{Path, PathBuf};

use super::reconcile_inventory::{ReconcileInventoryUseCase, ReconcileOutcome};
use crate::application::services::alias_emitter::AliasEmitter;
use crate::application::services::discovery_service::DiscoveryService;
use crate::common::defaults;
use crate::common::error::RosterError;
use crate::common::result::{ResultExt, RosterResult};
use crate::domain::value_objects::{AliasStyle, OwnerIdentity, SyncStrategy};
use crate::infrastructure::filesystem::{write_artifact, SnapshotStore};
use crate::infrastructure::scm::RemoteSync;

/// Settings for one inventory-and-sync run
#[derive(Debug, Clone)]
pub struct SyncWorkstationConfig {
    /// Directory scanned for checkouts
    pub scan_root: PathBuf,

    /// JSON snapshot of all known repositories
    pub snapshot_path: PathBuf,

    /// Generated shell file
    pub alias_path: PathBuf,

    /// Token that marks a checkout as ours
    pub identity: String,

    /// Shortcut syntax in the alias file
    pub alias_style: AliasStyle,

    /// Command used to update existing checkouts
    pub sync_strategy: SyncStrategy,
}

impl Default for SyncWorkstationConfig {
    fn default() -> Self {
        Self {
            scan_root: PathBuf::from(defaults::SCAN_ROOT),
            snapshot_path: PathBuf::from(defaults::SNAPSHOT_FILE),
            alias_path: PathBuf::from(defaults::ALIAS_FILE),
            identity: defaults::OWNER_IDENTITY.to_string(),
            alias_style: AliasStyle::default(),
            sync_strategy: SyncStrategy::default(),
        }
    }
}

impl SyncWorkstationConfig {
    pub fn with_scan_root(mut self, scan_root: impl Into<PathBuf>) -> Self {
        self.scan_root = scan_root.into();
        self
    }

    pub fn with_snapshot_path(mut self, snapshot_path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = snapshot_path.into();
        self
    }

    pub fn with_alias_path(mut self, alias_path: impl Into<PathBuf>) -> Self {
        self.alias_path = alias_path.into();
        self
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }

    pub fn with_alias_style(mut self, alias_style: AliasStyle) -> Self {
        self.alias_style = alias_style;
        self
    }

    pub fn with_sync_strategy(mut self, sync_strategy: SyncStrategy) -> Self {
        self.sync_strategy = sync_strategy;
        self
    }

    /// Reject settings that would make the run meaningless
    pub fn validate(&self) -> RosterResult<()> {
        if self.identity.trim().is_empty() {
            return Err(RosterError::config_error("identity must not be empty"));
        }
        if self.snapshot_path == self.alias_path {
            return Err(RosterError::config_error(
                "snapshot file and alias file must be different paths",
            ));
        }
        Ok(())
    }
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Repositories remembered before the run
    pub persisted_count: usize,

    /// Repositories found on disk
    pub discovered_count: usize,

    /// Clone/pull results and the merged inventory
    pub outcome: ReconcileOutcome,

    /// Where the snapshot was written
    pub snapshot_path: PathBuf,

    /// Where the alias file was written
    pub alias_path: PathBuf,
}

/// Load, scan, reconcile, then write the snapshot and alias file
///
/// Artifacts are only written after reconciliation succeeds, so a fatal error
/// leaves the previous snapshot and alias file untouched.
pub struct SyncWorkstationUseCase<R: RemoteSync> {
    config: SyncWorkstationConfig,
    remote: R,
}

impl<R: RemoteSync> SyncWorkstationUseCase<R> {
    pub fn new(config: SyncWorkstationConfig, remote: R) -> Self {
        Self { config, remote }
    }

    pub fn config(&self) -> &SyncWorkstationConfig {
        &self.config
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub async fn execute(&self) -> RosterResult<SyncReport> {
        self.config.validate()?;

        // 1. remembered repositories
        let store = SnapshotStore::new(&self.config.snapshot_path);
        let persisted = store.load().await?;
        let persisted_count = persisted.len();

        // 2. repositories on disk
        let discovery = DiscoveryService::new(OwnerIdentity::new(&self.config.identity));
        let scan_root = self.config.scan_root.clone();
        let discovered = tokio::task::spawn_blocking(move || discovery.discover(&scan_root))
            .await
            .map_err(|e| RosterError::internal_error_with_source("Repository scan aborted", e))??;
        let discovered_count = discovered.len();

        // 3. clone / pull / merge
        let outcome = ReconcileInventoryUseCase::new(&self.remote)
            .execute(discovered, persisted)
            .await?;

        // 4. artifacts
        store.save(&outcome.inventory).await?;
        self.write_aliases(&outcome, &self.config.alias_path).await?;

        tracing::info!(
            "Synced {} repositories ({} cloned, {} pulled, {} failed)",
            outcome.inventory.len(),
            outcome.cloned.len(),
            outcome.pulled.len(),
            outcome.failures.len()
        );

        Ok(SyncReport {
            persisted_count,
            discovered_count,
            outcome,
            snapshot_path: self.config.snapshot_path.clone(),
            alias_path: self.config.alias_path.clone(),
        })
    }

    async fn write_aliases(&self, outcome: &ReconcileOutcome, path: &Path) -> RosterResult<()> {
        let content = AliasEmitter::new(self.config.alias_style).render(&outcome.inventory);
        write_artifact(path, content.as_bytes())
            .await
            .with_filesystem_error(
                format!("Failed to write alias file {}", path.display()),
                Some(path.to_path_buf()),
            )
    }
}

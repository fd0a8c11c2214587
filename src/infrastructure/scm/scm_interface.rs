use crate::domain::entities::Repository;
use crate::infrastructure::process::CommandExecutorError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Remote operations the reconciler needs
///
/// Implementations must be best-effort per repository: an `Err` is logged by
/// the caller and the run carries on with the next repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteSync: Send + Sync {
    /// Make sure `repo` is checked out at its location, cloning it if needed
    async fn ensure_cloned(&self, repo: &Repository) -> Result<(), ScmError>;

    /// Bring an existing checkout up to date with its remote
    async fn pull(&self, repo: &Repository) -> Result<(), ScmError>;
}

/// Errors that can occur during remote operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Clone of '{name}' failed: {source}")]
    CloneFailed {
        name: String,
        #[source]
        source: CommandExecutorError,
    },

    #[error("Sync of '{name}' failed: {source}")]
    SyncFailed {
        name: String,
        #[source]
        source: CommandExecutorError,
    },

    #[error("Could not prepare {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Repository '{name}' has no parent directory to clone into")]
    NoParentDirectory { name: String },

    #[error("Checkout of '{name}' not found at {path}")]
    CheckoutMissing { name: String, path: PathBuf },
}

impl ScmError {
    /// Create a clone failed error
    pub fn clone_failed(name: impl Into<String>, source: CommandExecutorError) -> Self {
        Self::CloneFailed {
            name: name.into(),
            source,
        }
    }

    /// Create a sync failed error
    pub fn sync_failed(name: impl Into<String>, source: CommandExecutorError) -> Self {
        Self::SyncFailed {
            name: name.into(),
            source,
        }
    }
}

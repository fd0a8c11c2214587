use super::scm_interface::{RemoteSync, ScmError};
use crate::domain::entities::Repository;
use crate::domain::value_objects::SyncStrategy;
use crate::infrastructure::process::{CommandExecutor, ExecutionConfig};
use async_trait::async_trait;
use tokio::fs as async_fs;

/// `RemoteSync` backed by the `gh` and `git` command line tools
pub struct GhCliRemote {
    executor: CommandExecutor,
    gh_executable: String,
    strategy: SyncStrategy,
}

impl Default for GhCliRemote {
    fn default() -> Self {
        Self {
            executor: CommandExecutor::new(),
            gh_executable: "gh".to_string(),
            strategy: SyncStrategy::default(),
        }
    }
}

impl GhCliRemote {
    /// Create a remote using `gh` from `PATH` and `git pull` for updates
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different command to update existing checkouts
    pub fn with_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Use a custom `gh` executable path
    pub fn with_gh_executable(mut self, executable: impl Into<String>) -> Self {
        self.gh_executable = executable.into();
        self
    }

    /// Strategy used by `pull`
    pub fn strategy(&self) -> SyncStrategy {
        self.strategy
    }
}

#[async_trait]
impl RemoteSync for GhCliRemote {
    async fn ensure_cloned(&self, repo: &Repository) -> Result<(), ScmError> {
        let parent = repo.parent_dir().ok_or_else(|| ScmError::NoParentDirectory {
            name: repo.name.clone(),
        })?;

        async_fs::create_dir_all(parent)
            .await
            .map_err(|source| ScmError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source,
            })?;

        let location = repo.location.to_string_lossy();
        let args = ["repo", "clone", repo.name.as_str(), &*location];
        let config = ExecutionConfig::new().with_working_directory(parent);

        self.executor
            .execute(&self.gh_executable, &args, &config)
            .await
            .map_err(|e| ScmError::clone_failed(&repo.name, e))?;

        Ok(())
    }

    async fn pull(&self, repo: &Repository) -> Result<(), ScmError> {
        if !repo.location.is_dir() {
            return Err(ScmError::CheckoutMissing {
                name: repo.name.clone(),
                path: repo.location.clone(),
            });
        }

        let (program, args) = self.strategy.command();
        let program = if program == "gh" {
            self.gh_executable.as_str()
        } else {
            program
        };
        let config = ExecutionConfig::new().with_working_directory(&repo.location);

        self.executor
            .execute(program, args, &config)
            .await
            .map_err(|e| ScmError::sync_failed(&repo.name, e))?;

        Ok(())
    }
}

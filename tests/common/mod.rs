//! Common test utilities and helpers
//!
//! Fixtures for building fake checkouts on disk and a `RemoteSync` double
//! that records calls instead of talking to the network.
#![allow(dead_code)]

use async_trait::async_trait;
use repo_roster::domain::entities::Repository;
use repo_roster::infrastructure::process::CommandExecutorError;
use repo_roster::infrastructure::scm::{RemoteSync, ScmError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const OWNER: &str = "pablothedeveloper";

/// Create `<parent>/<name>/.git/config` whose remote belongs to `owner`
pub fn make_checkout(parent: &Path, name: &str, owner: &str) -> PathBuf {
    let location = parent.join(name);
    let git_dir = location.join(".git");
    std::fs::create_dir_all(&git_dir).unwrap();
    std::fs::write(
        git_dir.join("config"),
        format!(
            "[remote \"origin\"]\n\turl = git@github.com:{}/{}.git\n",
            owner, name
        ),
    )
    .unwrap();
    location
}

/// Write a snapshot file in the on-disk JSON format
pub fn write_snapshot(path: &Path, records: &[(&str, &Path)]) {
    let records: Vec<serde_json::Value> = records
        .iter()
        .map(|(name, location)| {
            serde_json::json!({ "name": name, "location": location.to_string_lossy() })
        })
        .collect();
    std::fs::write(path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
}

/// Read a snapshot file back as (name, location) pairs
pub fn read_snapshot(path: &Path) -> Vec<(String, PathBuf)> {
    let text = std::fs::read_to_string(path).unwrap();
    let records: Vec<Repository> = serde_json::from_str(&text).unwrap();
    records.into_iter().map(|r| (r.name, r.location)).collect()
}

/// Remote double: records every call and fails for configured names
///
/// Successful clones create the checkout directory so a following run sees
/// it, unless the double was built with `offline`.
#[derive(Default)]
pub struct RecordingRemote {
    calls: Mutex<Vec<String>>,
    failing: HashSet<String>,
    creates_checkouts: bool,
}

impl RecordingRemote {
    pub fn new() -> Self {
        Self {
            creates_checkouts: true,
            ..Self::default()
        }
    }

    /// Record calls without touching the file system
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn failure(&self, repo: &Repository) -> Option<CommandExecutorError> {
        self.failing
            .contains(&repo.name)
            .then(|| CommandExecutorError::CommandFailed {
                command: format!("fake {}", repo.name),
                exit_code: 1,
            })
    }
}

#[async_trait]
impl RemoteSync for RecordingRemote {
    async fn ensure_cloned(&self, repo: &Repository) -> Result<(), ScmError> {
        self.calls.lock().unwrap().push(format!("clone {}", repo.name));
        if let Some(error) = self.failure(repo) {
            return Err(ScmError::clone_failed(&repo.name, error));
        }
        if self.creates_checkouts {
            std::fs::create_dir_all(repo.location.join(".git")).unwrap();
        }
        Ok(())
    }

    async fn pull(&self, repo: &Repository) -> Result<(), ScmError> {
        self.calls.lock().unwrap().push(format!("pull {}", repo.name));
        match self.failure(repo) {
            Some(error) => Err(ScmError::sync_failed(&repo.name, error)),
            None => Ok(()),
        }
    }
}

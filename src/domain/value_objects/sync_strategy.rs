use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Command used to bring an existing checkout up to date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncStrategy {
    /// `git pull` inside the checkout
    Pull,
    /// `gh repo sync` inside the checkout
    GhSync,
}

impl Default for SyncStrategy {
    fn default() -> Self {
        Self::Pull
    }
}

impl fmt::Display for SyncStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStrategy::Pull => write!(f, "pull"),
            SyncStrategy::GhSync => write!(f, "gh-sync"),
        }
    }
}

impl FromStr for SyncStrategy {
    type Err = SyncStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pull" | "git-pull" => Ok(SyncStrategy::Pull),
            "gh-sync" | "sync" => Ok(SyncStrategy::GhSync),
            _ => Err(SyncStrategyError(s.to_string())),
        }
    }
}

impl SyncStrategy {
    /// Executable and arguments run inside the checkout
    pub fn command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            SyncStrategy::Pull => ("git", &["pull"]),
            SyncStrategy::GhSync => ("gh", &["repo", "sync"]),
        }
    }
}

/// Unknown sync strategy name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncStrategyError(pub String);

impl fmt::Display for SyncStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported sync strategy: '{}'. Supported strategies are: pull, gh-sync",
            self.0
        )
    }
}

impl std::error::Error for SyncStrategyError {}

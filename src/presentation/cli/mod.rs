pub mod commands;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::application::use_cases::SyncWorkstationConfig;
use crate::common::defaults;
use crate::domain::value_objects::{AliasStyle, SyncStrategy};
use commands::sync::SyncCommand;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// repo-roster - inventory, sync and alias the git checkouts you own
///
/// Scans the root directory for checkouts whose git config mentions your
/// identity, clones anything remembered in the snapshot that is missing,
/// pulls everything else, then rewrites the snapshot and the alias file.
#[derive(Parser, Debug)]
#[command(name = "repo-roster")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Directory scanned for checkouts
    #[arg(long, env = "REPO_ROSTER_ROOT", default_value = defaults::SCAN_ROOT)]
    pub root: PathBuf,

    /// JSON file remembering every known repository
    #[arg(long, env = "REPO_ROSTER_SNAPSHOT", default_value = defaults::SNAPSHOT_FILE)]
    pub snapshot: PathBuf,

    /// Generated shell file with shortcuts and exports
    #[arg(long, env = "REPO_ROSTER_ALIAS_FILE", default_value = defaults::ALIAS_FILE)]
    pub alias_file: PathBuf,

    /// Token looked up in .git/config to decide ownership
    #[arg(long, env = "REPO_ROSTER_IDENTITY", default_value = defaults::OWNER_IDENTITY)]
    pub identity: String,

    /// Shortcut syntax: abbr (fish) or alias (bash, zsh)
    #[arg(long, env = "REPO_ROSTER_ALIAS_STYLE", default_value = "abbr")]
    pub alias_style: AliasStyle,

    /// Update command for existing checkouts: pull or gh-sync
    #[arg(long, env = "REPO_ROSTER_SYNC_STRATEGY", default_value = "pull")]
    pub sync_strategy: SyncStrategy,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> SyncWorkstationConfig {
        SyncWorkstationConfig::default()
            .with_scan_root(&self.root)
            .with_snapshot_path(&self.snapshot)
            .with_alias_path(&self.alias_file)
            .with_identity(&self.identity)
            .with_alias_style(self.alias_style)
            .with_sync_strategy(self.sync_strategy)
    }
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    /// Install the tracing subscriber; `RUST_LOG` wins over `--verbose`
    pub fn init_logging(&self) {
        let default_level = if self.cli.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("repo_roster={}", default_level)));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    pub async fn run(self) -> anyhow::Result<()> {
        colored::control::set_override(!self.cli.no_color);

        let command = SyncCommand::new(self.cli.to_config(), self.cli.verbose);
        match command.execute().await {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

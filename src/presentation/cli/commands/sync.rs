use anyhow::{Context, Result};
use colored::Colorize;

use crate::application::use_cases::{
    SyncFailure, SyncReport, SyncWorkstationConfig, SyncWorkstationUseCase,
};
use crate::infrastructure::scm::GhCliRemote;

/// Handler for the inventory-and-sync run
pub struct SyncCommand {
    pub config: SyncWorkstationConfig,
    pub verbose: bool,
}

impl SyncCommand {
    pub fn new(config: SyncWorkstationConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    pub async fn execute(&self) -> Result<()> {
        let remote = GhCliRemote::new().with_strategy(self.config.sync_strategy);
        let use_case = SyncWorkstationUseCase::new(self.config.clone(), remote);

        println!(
            "{} Synchronizing repositories under {}...",
            "::".blue().bold(),
            self.config.scan_root.display()
        );

        let report = use_case
            .execute()
            .await
            .context("Failed to synchronize repositories")?;

        self.print_report(&report);
        Ok(())
    }

    fn print_report(&self, report: &SyncReport) {
        let outcome = &report.outcome;

        println!("{} Synchronization completed!", "✓".green().bold());
        if self.verbose {
            println!("  Repositories remembered: {}", report.persisted_count);
            println!("  Repositories found on disk: {}", report.discovered_count);
            println!("  New repositories cloned: {}", outcome.cloned.len());
            println!("  Repositories pulled: {}", outcome.pulled.len());
            println!("  Snapshot: {}", report.snapshot_path.display());
            println!("  Aliases: {}", report.alias_path.display());
        }

        if !outcome.failures.is_empty() {
            println!("{} Some repositories were left unsynced:", "⚠".yellow().bold());
            for failure in &outcome.failures {
                println!("  {}", failure_line(failure));
            }
        }
    }
}

fn failure_line(failure: &SyncFailure) -> String {
    format!(
        "{} {}: {}",
        failure.operation,
        failure.name,
        failure.error.red()
    )
}

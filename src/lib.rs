//! # repo-roster - Workstation Repository Inventory
//!
//! `repo-roster` keeps the git checkouts you own on a workstation in step with
//! a remembered list of them. One run:
//!
//! 1. loads the JSON snapshot of every repository seen before,
//! 2. scans the root directory for checkouts whose `.git/config` mentions your
//!    identity,
//! 3. clones whatever the snapshot remembers but the disk lacks, and pulls
//!    everything found on disk,
//! 4. writes the union back to the snapshot and regenerates a shell file of
//!    per-repository shortcuts and `export` lines.
//!
//! A repository name bound to two different locations (snapshot vs. disk) is
//! a conflict: the run stops before cloning, pulling or writing anything.
//!
//! ## Quick Start
//!
//! ```bash
//! repo-roster --root ~/src --identity octocat
//! source ~/.generated_repo_aliases
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Repository records, the inventory and small value types
//! - [`application`]: Discovery, reconciliation and alias rendering
//! - [`infrastructure`]: Directory listing, snapshot file, `gh`/`git` processes
//! - [`presentation`]: CLI interface and user interaction
//! - [`common`]: Shared errors, result helpers and defaults
//!
//! ## Error Handling
//!
//! - [`common::error::RosterError`]: Main error type with detailed context
//! - [`common::result::RosterResult`]: Type alias for `Result<T, RosterError>`
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use repo_roster::application::use_cases::{SyncWorkstationConfig, SyncWorkstationUseCase};
//! use repo_roster::infrastructure::scm::GhCliRemote;
//!
//! # async fn example() -> repo_roster::Result<()> {
//! let config = SyncWorkstationConfig::default()
//!     .with_scan_root("/home/dev")
//!     .with_identity("octocat");
//!
//! let report = SyncWorkstationUseCase::new(config, GhCliRemote::new())
//!     .execute()
//!     .await?;
//!
//! println!("{} repositories known", report.outcome.inventory.len());
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::RosterError;
pub use crate::common::result::RosterResult as Result;

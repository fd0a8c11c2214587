/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - File system operations (directory listing, snapshot file, artifact writes)
/// - Process execution (commands attached to the operator's terminal)
/// - Remote operations (`gh` / `git` behind the `RemoteSync` trait)
pub mod filesystem;
pub mod process;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{SnapshotStore, SnapshotStoreError};
pub use process::CommandExecutor;
pub use scm::{GhCliRemote, RemoteSync, ScmError};

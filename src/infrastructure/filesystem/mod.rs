pub mod artifact_writer;
pub mod dir_prober;
pub mod snapshot_store;

pub use artifact_writer::write_artifact;
pub use dir_prober::{has_git_dir, walk_directories, walk_error, DirectoryWalk};
pub use snapshot_store::{SnapshotStore, SnapshotStoreError};

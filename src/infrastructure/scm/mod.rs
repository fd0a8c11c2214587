/// Remote operations infrastructure
///
/// The reconciler talks to remotes only through [`RemoteSync`]; the
/// production implementation shells out to `gh` and `git`.
pub mod gh_cli_remote;
pub mod scm_interface;

pub use gh_cli_remote::GhCliRemote;
pub use scm_interface::{RemoteSync, ScmError};

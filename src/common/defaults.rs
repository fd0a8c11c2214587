//! Built-in locations and identity used when nothing is overridden

/// Directory that is scanned for checkouts
pub const SCAN_ROOT: &str = "/home/dev";

/// JSON list of every repository seen so far
pub const SNAPSHOT_FILE: &str = "/home/dev/.generated_repo_list.json";

/// Shell file with the generated shortcuts and exports
pub const ALIAS_FILE: &str = "/home/dev/.generated_repo_aliases";

/// Token looked up in `.git/config` to decide ownership
pub const OWNER_IDENTITY: &str = "pablothedeveloper";

/// Git metadata directory name; never descended into
pub const GIT_DIR: &str = ".git";

/// Cache directory name; never descended into
pub const CACHE_DIR: &str = ".cache";

/// Config file inside the git metadata directory
pub const GIT_CONFIG_FILE: &str = "config";

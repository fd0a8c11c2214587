use std::ffi::OsStr;
use std::path::Path;
use walkdir::{DirEntry, FilterEntry, IntoIter, WalkDir};

use crate::common::defaults::{CACHE_DIR, GIT_DIR};
use crate::common::error::RosterError;

/// Depth-first walk over the directories below a root
pub type DirectoryWalk = FilterEntry<IntoIter, fn(&DirEntry) -> bool>;

/// Walk every directory below `root`, siblings in file name order
///
/// The root itself is not yielded. Symlinks are not followed, files are
/// skipped and `.git` / `.cache` directories are pruned with their contents.
/// Call `skip_current_dir` on the walk to stop descending into the directory
/// last yielded.
pub fn walk_directories(root: &Path) -> DirectoryWalk {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(is_walkable as fn(&DirEntry) -> bool)
}

fn is_walkable(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && !is_reserved(entry.file_name())
}

fn is_reserved(name: &OsStr) -> bool {
    name == GIT_DIR || name == CACHE_DIR
}

/// Whether `dir` contains a real `.git` directory (not a file, not a symlink)
pub fn has_git_dir(dir: &Path) -> bool {
    std::fs::symlink_metadata(dir.join(GIT_DIR))
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

/// Turn a failed listing into a file system error carrying the path
pub fn walk_error(error: walkdir::Error) -> RosterError {
    let path = error.path().map(Path::to_path_buf);
    let message = match &path {
        Some(path) => format!("Failed to list directory {}", path.display()),
        None => "Failed to walk directory tree".to_string(),
    };

    match error.into_io_error() {
        Some(source) => RosterError::filesystem_error_with_source(message, path, source),
        None => RosterError::filesystem_error(message, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn walked(root: &Path) -> Vec<PathBuf> {
        walk_directories(root)
            .map(|entry| entry.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn test_walks_directories_sorted_and_skips_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("beta").join("inner")).unwrap();
        std::fs::create_dir(temp_dir.path().join("alpha")).unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "hi").unwrap();

        assert_eq!(
            walked(temp_dir.path()),
            vec![
                PathBuf::from("alpha"),
                PathBuf::from("beta"),
                PathBuf::from("beta/inner"),
            ]
        );
    }

    #[test]
    fn test_reserved_directories_are_pruned() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join(".git").join("modules")).unwrap();
        std::fs::create_dir_all(temp_dir.path().join("repo").join(".cache").join("x")).unwrap();

        assert_eq!(walked(temp_dir.path()), vec![PathBuf::from("repo")]);
    }

    #[test]
    fn test_skip_current_dir_stops_descent() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("a").join("deep")).unwrap();
        std::fs::create_dir(temp_dir.path().join("b")).unwrap();

        let mut walk = walk_directories(temp_dir.path());
        let mut seen = Vec::new();
        while let Some(entry) = walk.next() {
            let entry = entry.unwrap();
            seen.push(entry.file_name().to_string_lossy().into_owned());
            if entry.file_name() == "a" {
                walk.skip_current_dir();
            }
        }
        assert_eq!(seen, vec!["a", "b"]);
    }

    #[test]
    fn test_has_git_dir() {
        let temp_dir = TempDir::new().unwrap();
        let repo = temp_dir.path().join("repo");
        let worktree = temp_dir.path().join("worktree");
        std::fs::create_dir_all(repo.join(".git")).unwrap();
        std::fs::create_dir(&worktree).unwrap();
        std::fs::write(worktree.join(".git"), "gitdir: /elsewhere\n").unwrap();

        assert!(has_git_dir(&repo));
        assert!(!has_git_dir(&worktree));
        assert!(!has_git_dir(temp_dir.path()));
    }

    #[test]
    fn test_missing_root_is_an_error_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let error = walk_directories(&missing).next().unwrap().unwrap_err();
        match walk_error(error) {
            RosterError::FileSystemError { path, source, .. } => {
                assert_eq!(path, Some(missing));
                assert!(source.is_some());
            }
            other => panic!("Expected FileSystemError, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_followed() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("real").join("child")).unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("real"), temp_dir.path().join("link"))
            .unwrap();

        assert_eq!(
            walked(temp_dir.path()),
            vec![PathBuf::from("real"), PathBuf::from("real/child")]
        );
    }
}

use std::path::{Path, PathBuf};
use tokio::fs as async_fs;

/// Write `contents` to `path` through a sibling temporary file
///
/// Parent directories are created as needed. The temporary file is renamed
/// over the target, so readers never observe a half-written artifact.
pub async fn write_artifact(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }

    let tmp_path = temporary_sibling(path);
    async_fs::write(&tmp_path, contents).await?;
    if let Err(e) = async_fs::rename(&tmp_path, path).await {
        let _ = async_fs::remove_file(&tmp_path).await;
        return Err(e);
    }
    Ok(())
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

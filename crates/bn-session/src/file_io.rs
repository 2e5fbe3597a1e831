use crate::{SessionStoreError, SessionStoreResult};

use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes `contents` using the atomic write pattern.
///
/// 1. Writes to temp file (owner-only permissions on unix)
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
pub(crate) fn write_atomic(final_path: &Path, contents: &[u8]) -> SessionStoreResult<()> {
    let file_name = final_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = final_path.with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

    stage(&temp_path, |file| file.write_all(contents))
        .map_err(|e| SessionStoreError::file_write(temp_path.clone(), e))?;

    fs::rename(&temp_path, final_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SessionStoreError::atomic_rename(temp_path.clone(), final_path.to_path_buf(), e)
    })
}

/// Creates `temp_path`, fills it and syncs it. On any failure the partial
/// file is removed before the error is returned.
pub(crate) fn stage(
    temp_path: &Path,
    fill: impl FnOnce(&mut fs::File) -> std::io::Result<()>,
) -> std::io::Result<()> {
    let mut file = create_private(temp_path)?;

    let written = fill(&mut file).and_then(|()| file.sync_all());
    drop(file);

    if written.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    written
}

/// Removes a file, treating "already gone" as success.
pub(crate) fn remove_if_exists(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(unix)]
fn create_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> std::io::Result<fs::File> {
    fs::File::create(path)
}

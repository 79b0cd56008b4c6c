//! Atomic I/O operations with file locking

use std::fs;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Content goes to a uniquely named temp file next to `path`, which is then
/// renamed over it. Concurrent writers each get their own temp file; the
/// temp file is removed if any step fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;

    temp_file
        .as_file()
        .lock_exclusive()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_file.path(), e))?;

    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(temp_file.path(), e))?;

    FileExt::unlock(temp_file.as_file())
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    temp_file
        .persist(path)
        .map_err(|e| Error::io(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

//! Atomic variant of the generated-file writer.
//!
//! The content goes to a uniquely named temporary file in the destination
//! directory, is synced to disk, and is then renamed over the target. The
//! rename is atomic on POSIX when source and target share a filesystem,
//! which holds because the temp file lives next to the target.
//!
//! On failure the temporary file is removed when its handle drops.

use super::ensure_parent_dir;
use crate::error::{Result, ScaffoldError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `content` to `path`, creating parent directories.
///
/// Readers observe either the previous file or the complete new one.
pub fn write_generated_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| ScaffoldError::io(dir, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| ScaffoldError::io(temp.path(), e))?;

    temp.persist(path)
        .map_err(|e| ScaffoldError::io(path, e.error))?;

    // Persist the directory entry as well.
    #[cfg(unix)]
    if let Ok(handle) = std::fs::File::open(dir) {
        let _ = handle.sync_all();
    }

    tracing::debug!(
        "atomically wrote {} bytes to {}",
        content.len(),
        path.display()
    );
    Ok(())
}

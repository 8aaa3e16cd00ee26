//! Writing generated files.
//!
//! [`write_generated`] is a thin wrapper over `std::fs::write` that also
//! creates missing parent directories. It makes no atomicity promise; use
//! [`write_generated_atomic`] when a reader must never see a partial file.

pub mod atomic;

pub use atomic::write_generated_atomic;

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::Path;

/// Create every missing parent directory of `path`.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }
    Ok(())
}

/// Write `content` to `path`, creating parent directories and overwriting
/// any existing file.
///
/// # Returns
///
/// * `Ok(())` - The file was written
/// * `Err(ScaffoldError::Io)` - A parent is not a directory or the path is not writable
pub fn write_generated<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(|e| ScaffoldError::io(path, e))?;

    tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_missing_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".github/workflows/ci.yml");

        write_generated(&path, "name: CI\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name: CI\n");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        fs::write(&path, "old content that is longer").unwrap();

        write_generated(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "i am a file").unwrap();

        let err = write_generated(blocker.join("out.txt"), "x").unwrap_err();

        assert!(matches!(err, ScaffoldError::Io { .. }));
        assert_eq!(err.exit_code(), crate::exit_codes::WRITE_FAILURE);
    }

    #[test]
    fn test_write_fails_when_target_is_a_directory() {
        let temp = TempDir::new().unwrap();
        let err = write_generated(temp.path(), "x").unwrap_err();
        match err {
            ScaffoldError::Io { path, .. } => assert_eq!(path, temp.path()),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

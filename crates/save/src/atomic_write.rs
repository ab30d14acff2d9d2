//! Atomic file write using the write-rename pattern.
//!
//! Writes data to a temporary file (`{path}.tmp`), calls `sync_all()` to
//! ensure bytes are flushed to persistent storage, then atomically renames
//! the temp file to the final path.  A crash during the write cannot corrupt
//! an existing slot file.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Atomically writes `data` to `path` using the write-rename pattern.
///
/// 1. Write to `{path}.tmp`
/// 2. `sync_all()` to flush to disk
/// 3. `rename` temp to final path (atomic on POSIX; near-atomic elsewhere)
///
/// If the process crashes during step 1 or 2, the original file at `path`
/// remains untouched.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut tmp_path = path.as_os_str().to_os_string();
    tmp_path.push(".tmp");

    // Ensure parent directory exists.
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Step 1: Write to temporary file.
    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;

    // Step 2: Flush to persistent storage.
    file.sync_all()?;

    // Step 3: Atomically rename temp file to final path.
    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn test_atomic_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = test_path(&dir, "slot.bin");

        atomic_write(&path, b"hello world").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"hello world");
        // Temp file should not remain.
        assert!(!path.with_extension("bin.tmp").exists());
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = test_path(&dir, "slot.bin");

        atomic_write(&path, b"version 1").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"version 1");

        atomic_write(&path, b"version 2").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"version 2");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deep/slot.bin");

        atomic_write(&path, b"nested data").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"nested data");
    }

    #[test]
    fn test_atomic_write_recovers_from_leftover_tmp() {
        // A .tmp left behind by a crashed write must not block a new write.
        let dir = tempfile::tempdir().unwrap();
        let path = test_path(&dir, "slot.bin");
        let tmp = test_path(&dir, "slot.bin.tmp");

        fs::write(&path, b"original").unwrap();
        fs::write(&tmp, b"partial garbage").unwrap();

        atomic_write(&path, b"new save").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new save");
        assert!(!tmp.exists());
    }
}

// ---------------------------------------------------------------------------
// SaveError: typed errors for the custom save load/save paths
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while reading, decoding, or migrating the custom
/// save record.
///
/// The load orchestration absorbs every variant after the host's own load
/// succeeded (falling back to first-run fill), but internal code still
/// propagates typed errors so the fallback decision lives in one place.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error (permission denied, mount unavailable, disk full, etc.)
    Io(std::io::Error),
    /// Byte window shorter than the fixed record size.
    Truncated { expected: usize, found: usize },
    /// Record version is newer than this build supports.
    VersionMismatch { expected_max: u32, found: u32 },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::Truncated { expected, found } => write!(
                f,
                "Truncated record: expected {expected} bytes, found {found}"
            ),
            SaveError::VersionMismatch {
                expected_max,
                found,
            } => write!(
                f,
                "Version mismatch: record is v{found}, but this build only supports up to v{expected_max}"
            ),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

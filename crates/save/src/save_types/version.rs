// ---------------------------------------------------------------------------
// Custom save record version constants
// ---------------------------------------------------------------------------

/// Current custom save record version.
/// v0 = vanilla baseline: version + initialized flag only, no dex content
/// v1 = seen table (backfilled from the host's own dex on migration)
/// v2 = caught table (backfilled from the host's own dex on migration)
pub const CURRENT_SAVE_VERSION: u32 = 2;

/// The version a zeroed record starts at, before any migration ran.
pub const OLDEST_SAVE_VERSION: u32 = 0;

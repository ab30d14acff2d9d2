// ---------------------------------------------------------------------------
// Release notes shown with the one-time update notice
// ---------------------------------------------------------------------------

/// Headline of the modal notice raised when a load migrated the record.
pub const UPDATE_NOTICE: &str =
    "A mod update has been detected. Press Details to view the changelog.";

/// Human-readable release notes, newest first.
pub const CHANGELOG: &str = "\
v2: Dex now tracks caught species separately from seen species.
v1: Added mod-side dex tracking, seeded from your existing game progress.
";

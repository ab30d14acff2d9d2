// ---------------------------------------------------------------------------
// Record structs and version constants (split into submodules)
// ---------------------------------------------------------------------------

mod record;
mod version;

// Re-export everything so callers see the same flat namespace.
pub use record::*;
pub use version::*;

// ---------------------------------------------------------------------------
// Host capability surface
// ---------------------------------------------------------------------------
//
// The save core never touches the host binary directly.  Whatever binding
// layer sits between us and the host (an in-process hook installer on the
// real target, a plain struct in tests) hands the core an object implementing
// these traits.  Raw byte offsets into host structures are that layer's
// problem, not ours.

use log::info;

/// Number of species the host's own dex tracks.  Sizes the custom record's
/// bitmask tables.
pub const SPECIES_COUNT: u16 = 493;

/// Per-operation view of the host's save context.
///
/// The two slot flags mirror the host's own dual-slot save discipline: on a
/// load they describe which slot the host just read, on a save which slot(s)
/// the host just wrote.  The dex queries expose host-owned progress so
/// migration steps can backfill tables that did not exist in older record
/// versions.
pub trait HostContext {
    /// True when the host's main save slot is active for this operation.
    fn main_slot_active(&self) -> bool;

    /// True when the host's backup save slot is active for this operation.
    fn backup_slot_active(&self) -> bool;

    /// Whether the host's own dex marks `species` as seen.
    fn species_seen(&self, species: u16) -> bool;

    /// Whether the host's own dex marks `species` as caught.
    fn species_caught(&self, species: u16) -> bool;
}

/// Sink for the one-time user-visible update notice raised when a load
/// migrated the custom record.  Fire-and-forget: implementations must not
/// fail and must not block the load.
pub trait Notifier {
    fn show_update_notice(&self, summary: &str, changelog: &str);
}

/// `Notifier` that writes the notice to the log instead of raising a modal.
/// Useful on targets without a dialog surface and in tests.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show_update_notice(&self, summary: &str, changelog: &str) {
        info!("{summary}");
        info!("{changelog}");
    }
}

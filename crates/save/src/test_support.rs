// ---------------------------------------------------------------------------
// Test doubles shared across the crate's test modules
// ---------------------------------------------------------------------------

use std::cell::RefCell;

use host::{HostContext, Notifier};

use crate::save_types::CustomSaveRecord;

/// Record at an arbitrary version, for migration tests.
pub(crate) fn record_at(version: u32) -> CustomSaveRecord {
    let mut record = CustomSaveRecord::vanilla();
    record.set_version(version);
    record
}

/// Scriptable `HostContext`: fixed slot flags plus explicit seen/caught sets.
pub(crate) struct TestHost {
    pub main_slot: bool,
    pub backup_slot: bool,
    pub seen: Vec<u16>,
    pub caught: Vec<u16>,
}

impl TestHost {
    /// Host with both slot flags off and an empty dex.
    pub fn inactive() -> Self {
        Self {
            main_slot: false,
            backup_slot: false,
            seen: Vec::new(),
            caught: Vec::new(),
        }
    }

    pub fn with_slots(main_slot: bool, backup_slot: bool) -> Self {
        Self {
            main_slot,
            backup_slot,
            ..Self::inactive()
        }
    }

    pub fn with_dex(seen: &[u16], caught: &[u16]) -> Self {
        Self {
            seen: seen.to_vec(),
            caught: caught.to_vec(),
            ..Self::inactive()
        }
    }
}

impl HostContext for TestHost {
    fn main_slot_active(&self) -> bool {
        self.main_slot
    }

    fn backup_slot_active(&self) -> bool {
        self.backup_slot
    }

    fn species_seen(&self, species: u16) -> bool {
        self.seen.contains(&species)
    }

    fn species_caught(&self, species: u16) -> bool {
        self.caught.contains(&species)
    }
}

/// `Notifier` that records every notice instead of raising one.
pub(crate) struct RecordingNotifier {
    pub notices: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            notices: RefCell::new(Vec::new()),
        }
    }

    pub fn notice_count(&self) -> usize {
        self.notices.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn show_update_notice(&self, summary: &str, changelog: &str) {
        self.notices
            .borrow_mut()
            .push((summary.to_string(), changelog.to_string()));
    }
}

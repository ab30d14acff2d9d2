// ---------------------------------------------------------------------------
// RecordStore: the single live CustomSaveRecord instance
// ---------------------------------------------------------------------------
//
// One store exists per process, constructed at startup and owned by whoever
// drives the host callbacks.  It replaces the original design's static
// mutable record: load/save entry points and gameplay code receive the store
// by reference instead of reaching for a global.

use host::HostContext;
use log::info;

use crate::save_migrate::migrate_record_with_report;
use crate::save_migrate_registry::MigrationReport;
use crate::save_types::{CustomSaveRecord, RECORD_SIZE};

/// Owner of the in-memory custom save record.
///
/// The store is the single source of truth for both "what to persist" and
/// "what gameplay state currently reflects".  Gameplay code mutates the dex
/// payload through [`get_mut`](Self::get_mut) between persistence events;
/// `version` and `initialized` only change through the load paths below.
pub struct RecordStore {
    record: CustomSaveRecord,
}

impl RecordStore {
    /// Store holding the vanilla baseline record (uninitialized, oldest
    /// version).  This is the process-start state.
    pub fn new() -> Self {
        Self {
            record: CustomSaveRecord::vanilla(),
        }
    }

    /// Shared access to the live record.
    pub fn get(&self) -> &CustomSaveRecord {
        &self.record
    }

    /// Mutable access to the live record, for gameplay-facing code.
    pub fn get_mut(&mut self) -> &mut CustomSaveRecord {
        &mut self.record
    }

    /// Copies the exact byte image of the live record into a caller-supplied
    /// buffer of the fixed record size.  Side-effect free.
    pub fn serialize_into(&self, buf: &mut [u8; RECORD_SIZE]) {
        self.record.encode_into(buf);
    }

    /// Installs a record that came off disk and was migrated to the current
    /// version.
    pub(crate) fn install(&mut self, record: CustomSaveRecord) {
        self.record = record;
        info!("Custom save data loaded.");
    }

    /// First-run path: reset to the vanilla baseline, drive it through the
    /// full migration chain (so default population and forward migration
    /// share one code path), then mark the record initialized.
    pub(crate) fn default_fill(&mut self, host: &dyn HostContext) -> MigrationReport {
        info!("Generating custom save data for first launch.");

        self.record = CustomSaveRecord::vanilla();
        let report = migrate_record_with_report(&mut self.record, host)
            .unwrap_or_else(|e| unreachable!("vanilla record cannot fail migration: {e}"));
        self.record.mark_initialized();
        report
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save_types::CURRENT_SAVE_VERSION;
    use crate::test_support::TestHost;

    #[test]
    fn test_new_store_is_uninitialized_vanilla() {
        let store = RecordStore::new();
        assert!(!store.get().initialized());
        assert_eq!(store.get().version(), 0);
    }

    #[test]
    fn test_serialize_into_matches_record_encoding() {
        let mut store = RecordStore::new();
        store.get_mut().dex.mark_seen(25);
        store.get_mut().dex.mark_caught(25);

        let mut buf = [0u8; RECORD_SIZE];
        store.serialize_into(&mut buf);
        assert_eq!(buf, store.get().encode());
    }

    #[test]
    fn test_default_fill_runs_full_chain_and_initializes() {
        let mut store = RecordStore::new();
        let report = store.default_fill(&TestHost::inactive());

        assert!(store.get().initialized());
        assert_eq!(store.get().version(), CURRENT_SAVE_VERSION);
        assert_eq!(report.steps_applied, CURRENT_SAVE_VERSION);
    }

    #[test]
    fn test_default_fill_backfills_from_host() {
        let mut store = RecordStore::new();
        store.default_fill(&TestHost::with_dex(&[3, 4], &[4]));

        assert!(store.get().dex.is_seen(3));
        assert!(store.get().dex.is_caught(4));
        assert!(!store.get().dex.is_caught(3));
    }

    #[test]
    fn test_install_replaces_live_record() {
        let mut store = RecordStore::new();
        let mut record = crate::test_support::record_at(CURRENT_SAVE_VERSION);
        record.dex.mark_seen(1);
        store.install(record);

        assert_eq!(*store.get(), record);
    }
}

// ---------------------------------------------------------------------------
// Load/save orchestration: entry points for the host hook layer
// ---------------------------------------------------------------------------
//
// The external interception layer wraps the host's own load and save
// implementations; after calling through to the original it hands control
// here.  (That layer also forces the host's verify/hash checks to succeed,
// since the custom record lives outside the host's integrity mechanism.)
//
// Load: slot select -> read or first-run fill -> decode -> migrate ->
// install, with a one-time user notice when a loaded file migrated.  Save:
// serialize once, write each flagged slot independently.  Everything runs to
// completion on the calling thread.

use host::{HostContext, Notifier};
use log::{error, info};

use crate::changelog::{CHANGELOG, UPDATE_NOTICE};
use crate::record_store::RecordStore;
use crate::save_error::SaveError;
use crate::save_migrate::migrate_record_with_report;
use crate::save_types::{CustomSaveRecord, RECORD_SIZE};
use crate::slot_policy::{select_load_slot, SaveMount, SaveSlot};

/// Runs after the host's own load.  When `host_load_ok` is false the host
/// load failed: the failure propagates unchanged and no custom-record logic
/// runs.  Once the host load succeeded, the custom load always resolves
/// locally (missing file, short file, stale or future version all end with a
/// usable record in the store) and the host sees success.
pub fn on_host_load(
    store: &mut RecordStore,
    host: &dyn HostContext,
    notifier: &dyn Notifier,
    mount: &SaveMount,
    host_load_ok: bool,
) -> bool {
    if !host_load_ok {
        return false;
    }

    info!(
        "Loading custom save (main: {}, backup: {})",
        host.main_slot_active(),
        host.backup_slot_active()
    );

    let slot = select_load_slot(host.backup_slot_active());
    match load_slot_record(store, host, mount, slot) {
        Ok(migrated) => {
            if migrated {
                // One-time notice; fire-and-forget.
                notifier.show_update_notice(UPDATE_NOTICE, CHANGELOG);
            }
        }
        Err(e) => {
            // The host load already succeeded, so this is absorbed: start
            // over from first-run data rather than failing the whole load.
            error!(
                "Failed to load custom save from {}: {e}; falling back to first-run data",
                slot.file_name()
            );
            store.default_fill(host);
        }
    }

    true
}

/// Loads one slot into the store.  Returns whether the migration chain
/// executed at least one step on a record that came off disk; the first-run
/// fill path is silent by contract.
fn load_slot_record(
    store: &mut RecordStore,
    host: &dyn HostContext,
    mount: &SaveMount,
    slot: SaveSlot,
) -> Result<bool, SaveError> {
    // The window lives only for the duration of this call.
    let Some(window) = mount.read_record_window(slot)? else {
        store.default_fill(host);
        return Ok(false);
    };

    let mut record = CustomSaveRecord::decode(&window)?;
    let report = migrate_record_with_report(&mut record, host)?;

    if report.migrated() {
        info!(
            "Migrated custom save from v{} to v{} ({} steps applied)",
            report.original_version, report.final_version, report.steps_applied
        );
        for desc in &report.step_descriptions {
            info!("  - {desc}");
        }
    }

    store.install(record);
    Ok(report.migrated())
}

/// Runs strictly after the host completed its own save write.  Serializes
/// the live record once and writes it to every slot the host flagged active;
/// the two writes are independent and best-effort (a failure on one slot is
/// logged and does not block the other).  Fire-and-forget: nothing is
/// signaled to the caller.
pub fn on_host_save(store: &RecordStore, host: &dyn HostContext, mount: &SaveMount) {
    info!(
        "Saving custom data (main: {}, backup: {})",
        host.main_slot_active(),
        host.backup_slot_active()
    );

    let mut image = [0u8; RECORD_SIZE];
    store.serialize_into(&mut image);

    if host.main_slot_active() {
        write_slot(mount, SaveSlot::Primary, &image);
    }
    if host.backup_slot_active() {
        write_slot(mount, SaveSlot::Backup, &image);
    }
}

fn write_slot(mount: &SaveMount, slot: SaveSlot, image: &[u8; RECORD_SIZE]) {
    if let Err(e) = mount.write_record(slot, image) {
        error!("Failed to write custom save slot {}: {e}", slot.file_name());
    }
}

// ---------------------------------------------------------------------------
// Diagnostic export and slot maintenance
// ---------------------------------------------------------------------------
//
// Backing for the front-end's save tools: dump the live record to an
// unmanaged location for inspection, or delete a slot file to reset custom
// state.  Exports are one-way; nothing here is ever read back.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;

use crate::record_store::RecordStore;
use crate::save_types::RECORD_SIZE;
use crate::slot_policy::{SaveMount, SaveSlot};

/// Writes a copy of the live record to `path` (e.g. an SD card mount).
///
/// # Errors
///
/// Returns the underlying I/O error when the write fails.
pub fn export_record(store: &RecordStore, path: &Path) -> std::io::Result<()> {
    let mut image = [0u8; RECORD_SIZE];
    store.serialize_into(&mut image);
    fs::write(path, image)?;
    info!("Dumped custom save to {}", path.display());
    Ok(())
}

/// Deletes one slot file.  Returns whether a file was actually removed; a
/// missing file is not an error.
///
/// # Errors
///
/// Returns the underlying I/O error for failures other than a missing file.
pub fn delete_slot(mount: &SaveMount, slot: SaveSlot) -> std::io::Result<bool> {
    let path = mount.slot_path(slot);
    match fs::remove_file(&path) {
        Ok(()) => {
            info!("Deleted custom save slot {}", slot.file_name());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

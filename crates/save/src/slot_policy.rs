// ---------------------------------------------------------------------------
// Slot policy: which of the two redundant slot files to read or write
// ---------------------------------------------------------------------------
//
// The host keeps a main and a backup save; the custom record mirrors that
// duality with two independent files under the same mount.  Load reads
// exactly one slot, chosen from the host's backup flag.  Save writes each
// slot independently, driven by the host's per-operation flags.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::atomic_write::atomic_write;
use crate::save_error::SaveError;
use crate::save_types::RECORD_SIZE;

/// Logical role of a custom slot file.  Neither slot ever references the
/// other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveSlot {
    Primary,
    Backup,
}

impl SaveSlot {
    /// File name of this slot under the save mount.
    pub const fn file_name(self) -> &'static str {
        match self {
            SaveSlot::Primary => "Custom.bin",
            SaveSlot::Backup => "Custom_Backup.bin",
        }
    }
}

/// Slot to read on load: the backup file only when the host loaded from its
/// backup, the primary file otherwise.
pub(crate) fn select_load_slot(backup_slot_active: bool) -> SaveSlot {
    if !backup_slot_active {
        SaveSlot::Primary
    } else {
        SaveSlot::Backup
    }
}

/// Root directory holding the two slot files.  Stands in for the host's
/// `SaveData:/` mount; tests point it at a temp directory.
pub struct SaveMount {
    root: PathBuf,
}

impl SaveMount {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of a slot file under this mount.
    pub fn slot_path(&self, slot: SaveSlot) -> PathBuf {
        self.root.join(slot.file_name())
    }

    /// Reads a slot file into a byte window of at least [`RECORD_SIZE`]
    /// bytes.  Returns `Ok(None)` when the file does not exist (first-run).
    ///
    /// A file shorter than the record size is an older or damaged slot; the
    /// window is zero-filled past end-of-file so the decoded tail is defined
    /// (empty tables, not stale memory), and the short read is logged.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::Io` for read failures other than a missing file.
    pub(crate) fn read_record_window(&self, slot: SaveSlot) -> Result<Option<Vec<u8>>, SaveError> {
        let path = self.slot_path(slot);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if bytes.len() < RECORD_SIZE {
            warn!(
                "Custom save file {} is short: {} bytes, expected {}; treating the tail as zeroes",
                path.display(),
                bytes.len(),
                RECORD_SIZE
            );
        }

        // Window is max(file size, record size); only the leading fixed-size
        // window is meaningful to the decoder.
        let mut window = vec![0u8; bytes.len().max(RECORD_SIZE)];
        window[..bytes.len()].copy_from_slice(&bytes);
        Ok(Some(window))
    }

    /// Writes a record image to one slot file, durably (write-rename).
    pub(crate) fn write_record(
        &self,
        slot: SaveSlot,
        image: &[u8; RECORD_SIZE],
    ) -> std::io::Result<()> {
        let path = self.slot_path(slot);
        atomic_write(&path, image)?;
        info!("Wrote {} bytes to {}", image.len(), path.display());
        Ok(())
    }

    /// The mount's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

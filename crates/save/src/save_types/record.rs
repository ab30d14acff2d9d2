// ---------------------------------------------------------------------------
// CustomSaveRecord: the fixed-size record persisted alongside the host save
// ---------------------------------------------------------------------------
//
// The on-disk format is the raw field image of `CustomSaveRecord`: no header,
// no checksum, no compression.  The embedded version field is the only
// self-describing element.  Every field is a `u32` so the `repr(C)` layout
// has no padding and `bytemuck` can view the struct as plain bytes; the
// deployment target is fixed little-endian, matching the files the original
// record format produced.

use bytemuck::{Pod, Zeroable};
use host::SPECIES_COUNT;

use crate::save_error::SaveError;
use crate::save_types::version::OLDEST_SAVE_VERSION;

/// Bitmask words per dex table, sized to the host's species count.
pub const DEX_WORDS: usize = (SPECIES_COUNT as usize + 31) / 32;

/// Serialized size of [`CustomSaveRecord`], fixed at build time.  Slot files
/// written by this crate are exactly this long; shorter files from older
/// releases decode with a zero tail (see the slot read path).
pub const RECORD_SIZE: usize = std::mem::size_of::<CustomSaveRecord>();

/// Mod-owned completion table: one seen bit and one caught bit per species.
///
/// Layout grows append-only across record versions: `seen` arrived in v1,
/// `caught` in v2.  A zeroed table is a valid empty table.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct DexTable {
    seen: [u32; DEX_WORDS],
    caught: [u32; DEX_WORDS],
}

impl DexTable {
    fn bit(species: u16) -> Option<(usize, u32)> {
        if species >= SPECIES_COUNT {
            return None;
        }
        Some(((species / 32) as usize, 1u32 << (species % 32)))
    }

    /// Whether `species` is marked seen.  Out-of-range species are never seen.
    pub fn is_seen(&self, species: u16) -> bool {
        Self::bit(species).is_some_and(|(word, mask)| self.seen[word] & mask != 0)
    }

    /// Whether `species` is marked caught.
    pub fn is_caught(&self, species: u16) -> bool {
        Self::bit(species).is_some_and(|(word, mask)| self.caught[word] & mask != 0)
    }

    /// Marks `species` seen.  Out-of-range species are ignored.
    pub fn mark_seen(&mut self, species: u16) {
        if let Some((word, mask)) = Self::bit(species) {
            self.seen[word] |= mask;
        }
    }

    /// Marks `species` caught.  Out-of-range species are ignored.
    pub fn mark_caught(&mut self, species: u16) {
        if let Some((word, mask)) = Self::bit(species) {
            self.caught[word] |= mask;
        }
    }

    /// Number of species marked seen.
    pub fn seen_count(&self) -> u32 {
        self.seen.iter().map(|w| w.count_ones()).sum()
    }

    /// Number of species marked caught.
    pub fn caught_count(&self) -> u32 {
        self.caught.iter().map(|w| w.count_ones()).sum()
    }
}

/// The persisted entity.  `version` and `initialized` are private: only the
/// migration chain advances the version and only the store's first-run fill
/// flips `initialized`, which keeps both invariants in one place.  The dex
/// payload is freely mutable by gameplay code between persistence events.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct CustomSaveRecord {
    version: u32,
    initialized: u32,
    pub dex: DexTable,
}

impl CustomSaveRecord {
    /// The pre-mod baseline record: uninitialized, oldest version, empty dex.
    /// This is the in-memory state at process start and the starting point of
    /// the first-run fill path.
    pub fn vanilla() -> Self {
        let mut record: Self = Zeroable::zeroed();
        record.version = OLDEST_SAVE_VERSION;
        record
    }

    /// Schema version this record currently conforms to.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// True once the record was populated by a load or by first-run fill.
    pub fn initialized(&self) -> bool {
        self.initialized != 0
    }

    /// Advances the version.  The version never regresses; only migration
    /// steps call this.
    pub(crate) fn set_version(&mut self, version: u32) {
        debug_assert!(version >= self.version);
        self.version = version;
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = 1;
    }

    /// Interprets the leading [`RECORD_SIZE`] bytes of `window` as a record.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Truncated`] when the window is shorter than the
    /// fixed record size.  Callers that tolerate short files must zero-pad
    /// before decoding.
    pub fn decode(window: &[u8]) -> Result<Self, SaveError> {
        if window.len() < RECORD_SIZE {
            return Err(SaveError::Truncated {
                expected: RECORD_SIZE,
                found: window.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(&window[..RECORD_SIZE]))
    }

    /// Exact byte image of the record.
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        self.encode_into(&mut buf);
        buf
    }

    /// Copies the byte image into a caller-supplied buffer.  Side-effect free.
    pub fn encode_into(&self, buf: &mut [u8; RECORD_SIZE]) {
        buf.copy_from_slice(bytemuck::bytes_of(self));
    }
}

mod atomic_write;
mod changelog;
mod debug_export;
mod record_store;
mod save_error;
mod save_hooks;
mod save_migrate;
mod save_migrate_registry;
mod save_types;
mod slot_policy;

#[cfg(test)]
mod test_support;

pub use changelog::{CHANGELOG, UPDATE_NOTICE};
pub use debug_export::{delete_slot, export_record};
pub use record_store::RecordStore;
pub use save_error::SaveError;
pub use save_hooks::{on_host_load, on_host_save};
pub use save_migrate::{migrate_record, migrate_record_with_report, MigrationReport};
pub use save_types::{
    CustomSaveRecord, DexTable, CURRENT_SAVE_VERSION, DEX_WORDS, OLDEST_SAVE_VERSION, RECORD_SIZE,
};
pub use slot_policy::{SaveMount, SaveSlot};

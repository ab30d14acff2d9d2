// ---------------------------------------------------------------------------
// Migration logic
// ---------------------------------------------------------------------------
//
// This module defines the concrete migration steps and exposes the
// `migrate_record()` functions used by the load pipeline.  The chain is built
// via `build_migration_registry()`, which validates that every version
// transition from v0 to CURRENT_SAVE_VERSION is covered.
//
// Steps are total over their input version: whatever a v(N) record contains,
// the v(N)->v(N+1) step leaves a valid v(N+1) record.  New tables start
// zeroed (the codec guarantees that) and are backfilled from host-owned
// progress so existing players keep what the host already tracked.

use host::{HostContext, SPECIES_COUNT};

pub use crate::save_migrate_registry::MigrationReport;
use crate::save_migrate_registry::{MigrationRegistry, MigrationStep};
use crate::save_error::SaveError;
use crate::save_types::{CustomSaveRecord, CURRENT_SAVE_VERSION};

/// Build the full migration registry with all version transition steps.
///
/// The registry constructor validates the chain is contiguous (no gaps).
pub(crate) fn build_migration_registry() -> MigrationRegistry {
    let steps = vec![
        // v0 -> v1: seen table introduced; adopt the host's own seen marks.
        MigrationStep {
            from_version: 0,
            description: "Vanilla baseline -> v1: seen table, backfilled from host dex",
            migrate_fn: |record, host| {
                for species in 0..SPECIES_COUNT {
                    if host.species_seen(species) {
                        record.dex.mark_seen(species);
                    }
                }
            },
        },
        // v1 -> v2: caught table introduced; adopt the host's own caught marks.
        MigrationStep {
            from_version: 1,
            description: "v1 -> v2: caught table, backfilled from host dex",
            migrate_fn: |record, host| {
                for species in 0..SPECIES_COUNT {
                    if host.species_caught(species) {
                        record.dex.mark_caught(species);
                    }
                }
            },
        },
    ];

    MigrationRegistry::new(steps, CURRENT_SAVE_VERSION)
}

/// Migrate a record from any older version up to `CURRENT_SAVE_VERSION`.
///
/// Returns the original version so callers can log the migration.
///
/// # Errors
///
/// Returns `SaveError::VersionMismatch` if the record was written by a newer
/// build (`record.version() > CURRENT_SAVE_VERSION`).
pub fn migrate_record(
    record: &mut CustomSaveRecord,
    host: &dyn HostContext,
) -> Result<u32, SaveError> {
    let registry = build_migration_registry();
    let report = registry.migrate(record, host)?;
    Ok(report.original_version)
}

/// Migrate a record and return a detailed migration report.
///
/// # Errors
///
/// Returns `SaveError::VersionMismatch` if the record was written by a newer
/// build.
pub fn migrate_record_with_report(
    record: &mut CustomSaveRecord,
    host: &dyn HostContext,
) -> Result<MigrationReport, SaveError> {
    let registry = build_migration_registry();
    registry.migrate(record, host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record_at, TestHost};

    #[test]
    fn test_migrate_rejects_future_version() {
        let mut record = record_at(CURRENT_SAVE_VERSION + 1);
        let result = migrate_record(&mut record, &TestHost::inactive());
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            SaveError::VersionMismatch { .. }
        ));
        // A rejected record is left untouched.
        assert_eq!(record.version(), CURRENT_SAVE_VERSION + 1);
    }

    #[test]
    fn test_migrate_accepts_current_version() {
        let mut record = record_at(CURRENT_SAVE_VERSION);
        let result = migrate_record(&mut record, &TestHost::inactive());
        assert_eq!(result.unwrap(), CURRENT_SAVE_VERSION);
    }

    #[test]
    fn test_every_version_migrates_to_current() {
        for v in 0..=CURRENT_SAVE_VERSION {
            let mut record = record_at(v);
            let result = migrate_record(&mut record, &TestHost::inactive());
            assert!(
                result.is_ok(),
                "Migration from v{v} should succeed, got: {:?}",
                result.err()
            );
            assert_eq!(
                record.version(),
                CURRENT_SAVE_VERSION,
                "After migration from v{v}, version should be {CURRENT_SAVE_VERSION}"
            );
        }
    }

    #[test]
    fn test_partial_migration_step_count() {
        for start_version in 0..=CURRENT_SAVE_VERSION {
            let mut record = record_at(start_version);
            let report =
                migrate_record_with_report(&mut record, &TestHost::inactive()).unwrap();
            let expected_steps = CURRENT_SAVE_VERSION - start_version;
            assert_eq!(
                report.steps_applied, expected_steps,
                "From v{start_version}: expected {expected_steps} steps, got {}",
                report.steps_applied
            );
        }
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let host = TestHost::with_dex(&[7, 8], &[7]);
        let mut record = record_at(0);

        migrate_record(&mut record, &host).unwrap();
        let after_first = record;

        let report = migrate_record_with_report(&mut record, &host).unwrap();
        assert_eq!(report.steps_applied, 0);
        assert_eq!(record, after_first);
    }

    #[test]
    fn test_v0_migration_backfills_from_host_dex() {
        let host = TestHost::with_dex(&[1, 150, SPECIES_COUNT - 1], &[150]);
        let mut record = record_at(0);

        let report = migrate_record_with_report(&mut record, &host).unwrap();
        assert_eq!(report.steps_applied, 2);

        assert!(record.dex.is_seen(1));
        assert!(record.dex.is_seen(150));
        assert!(record.dex.is_seen(SPECIES_COUNT - 1));
        assert!(record.dex.is_caught(150));
        assert!(!record.dex.is_caught(1));
        assert_eq!(record.dex.seen_count(), 3);
        assert_eq!(record.dex.caught_count(), 1);
    }

    #[test]
    fn test_v1_migration_backfills_caught_only() {
        // A v1 record already owns its seen table; only caught is adopted.
        let host = TestHost::with_dex(&[10, 11], &[11]);
        let mut record = record_at(1);
        record.dex.mark_seen(99);

        migrate_record(&mut record, &host).unwrap();

        assert!(record.dex.is_seen(99), "existing seen marks survive");
        assert!(
            !record.dex.is_seen(10),
            "v1->v2 must not re-run the seen backfill"
        );
        assert!(record.dex.is_caught(11));
    }

    #[test]
    fn test_migration_preserves_existing_payload() {
        let mut record = record_at(1);
        record.dex.mark_seen(42);

        migrate_record(&mut record, &TestHost::inactive()).unwrap();

        assert!(record.dex.is_seen(42));
        assert_eq!(record.version(), CURRENT_SAVE_VERSION);
    }
}

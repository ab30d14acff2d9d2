// ---------------------------------------------------------------------------
// Migration registry: structured, validated migration chain
// ---------------------------------------------------------------------------
//
// Each migration step is a function `fn(&mut CustomSaveRecord, &dyn
// HostContext)` that transforms the record from version N to version N+1,
// reading host-owned state where a new field needs backfilling.  The registry
// validates at construction time that the chain is contiguous (no gaps, no
// duplicates).  Dispatch is purely by the record's current version, so a step
// whose input version no longer matches is skipped by construction.

use host::HostContext;
use log::info;

use crate::save_error::SaveError;
use crate::save_types::CustomSaveRecord;

/// A single migration step: transforms the record from `from_version` to
/// `from_version + 1`.
pub(crate) struct MigrationStep {
    pub from_version: u32,
    pub description: &'static str,
    pub migrate_fn: fn(&mut CustomSaveRecord, &dyn HostContext),
}

/// Result of running the migration chain on a record.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    /// The version the record was originally at.
    pub original_version: u32,
    /// The version the record is now at (equals `CURRENT_SAVE_VERSION`).
    pub final_version: u32,
    /// Number of migration steps that were applied.
    pub steps_applied: u32,
    /// Descriptions of each step that was applied, in order.
    pub step_descriptions: Vec<&'static str>,
}

impl MigrationReport {
    /// True when the chain executed at least one step.  The load path raises
    /// the one-time user notice exactly when this holds.
    pub fn migrated(&self) -> bool {
        self.steps_applied > 0
    }
}

/// Registry holding an ordered, validated chain of migration steps.
pub(crate) struct MigrationRegistry {
    steps: Vec<MigrationStep>,
    current_version: u32,
}

impl MigrationRegistry {
    /// Build a registry from a list of migration steps.
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - The chain has gaps (e.g., v1->v2 is missing)
    /// - The chain has duplicate source versions
    /// - The chain doesn't end at `current_version - 1`
    pub fn new(steps: Vec<MigrationStep>, current_version: u32) -> Self {
        // Validate: no duplicates
        let mut seen = std::collections::HashSet::new();
        for step in &steps {
            assert!(
                seen.insert(step.from_version),
                "Duplicate migration step for version {}",
                step.from_version
            );
        }

        // Validate: contiguous chain from 0 to current_version-1
        if current_version > 0 {
            for v in 0..current_version {
                assert!(
                    seen.contains(&v),
                    "Missing migration step from v{} to v{}. The migration chain must be \
                     contiguous from v0 to v{}.",
                    v,
                    v + 1,
                    current_version - 1
                );
            }
        }

        // Sort by from_version for deterministic application order
        let mut steps = steps;
        steps.sort_by_key(|s| s.from_version);

        Self {
            steps,
            current_version,
        }
    }

    /// Apply all necessary migration steps to bring a record from its current
    /// version up to `current_version`.  A record already at
    /// `current_version` is a zero-step no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `SaveError::VersionMismatch` if the record is from a future
    /// version.
    pub fn migrate(
        &self,
        record: &mut CustomSaveRecord,
        host: &dyn HostContext,
    ) -> Result<MigrationReport, SaveError> {
        let original_version = record.version();

        if record.version() > self.current_version {
            return Err(SaveError::VersionMismatch {
                expected_max: self.current_version,
                found: record.version(),
            });
        }

        let mut steps_applied = 0u32;
        let mut step_descriptions = Vec::new();

        // Apply each step whose from_version matches the record's current version
        for step in &self.steps {
            if record.version() >= self.current_version {
                break;
            }
            if step.from_version == record.version() {
                info!(
                    "Custom save version mismatch: expected v{}, got v{}; applying: {}",
                    self.current_version,
                    record.version(),
                    step.description
                );
                (step.migrate_fn)(record, host);
                record.set_version(step.from_version + 1);
                steps_applied += 1;
                step_descriptions.push(step.description);
            }
        }

        debug_assert_eq!(record.version(), self.current_version);

        Ok(MigrationReport {
            original_version,
            final_version: record.version(),
            steps_applied,
            step_descriptions,
        })
    }

    /// Returns the number of registered migration steps.
    #[cfg(test)]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the current (target) version.
    #[cfg(test)]
    pub fn current_version(&self) -> u32 {
        self.current_version
    }
}

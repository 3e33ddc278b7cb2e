//! Snapshot frequency validation.

use super::require_non_negative;
use crate::config::ZooCfg;
use crate::error::Result;
use crate::lint::{Rule, RuleId, RuleOutcome};

const KEY: &str = "snapCount";

/// Below this many transactions between snapshots, snapshotting dominates I/O.
const LOW_SNAP_COUNT: i64 = 5000;

/// Validates the number of transactions logged between snapshots.
pub struct SnapCountRule;

impl Rule for SnapCountRule {
    fn id(&self) -> RuleId {
        RuleId::new("snap-count")
    }

    fn name(&self) -> &str {
        "SnapCount"
    }

    fn description(&self) -> &str {
        "Ensures snapCount is non-negative and not so low that snapshots dominate I/O"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        if let Some(count) = require_non_negative(config, KEY, &mut outcome) {
            if count < LOW_SNAP_COUNT {
                outcome.warn(format!(
                    "`{KEY}` is {count}; values below {LOW_SNAP_COUNT} cause frequent snapshots"
                ));
            }
        }

        Ok(outcome)
    }
}

//! Request tracing detection.

use crate::config::ZooCfg;
use crate::error::Result;
use crate::lint::{Rule, RuleId, RuleOutcome};

/// Warns when request tracing is enabled.
pub struct TraceFileRule;

impl Rule for TraceFileRule {
    fn id(&self) -> RuleId {
        RuleId::new("trace-file")
    }

    fn name(&self) -> &str {
        "TraceFile"
    }

    fn description(&self) -> &str {
        "Warns when traceFile enables request tracing"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        if config.has("traceFile") {
            outcome.warn(
                "`traceFile` is set; request tracing slows the server and fills the disk",
            );
        }

        Ok(outcome)
    }
}

//! Non-negative limit rules.
//!
//! These settings all share one policy: present, integral and not negative.
//! `maxClientCnxns` additionally warns when set to 0, which disables the
//! per-host connection limit entirely.

use super::require_non_negative;
use crate::config::ZooCfg;
use crate::error::Result;
use crate::lint::{Rule, RuleId, RuleOutcome};

/// Validates the cap on queued requests.
pub struct GlobalOutstandingLimitRule;

impl Rule for GlobalOutstandingLimitRule {
    fn id(&self) -> RuleId {
        RuleId::new("global-outstanding-limit")
    }

    fn name(&self) -> &str {
        "GlobalOutstandingLimit"
    }

    fn description(&self) -> &str {
        "Ensures globalOutstandingLimit is a non-negative integer"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();
        require_non_negative(config, "globalOutstandingLimit", &mut outcome);
        Ok(outcome)
    }
}

/// Validates the transaction log preallocation block, in kilobytes.
pub struct PreAllocSizeRule;

impl Rule for PreAllocSizeRule {
    fn id(&self) -> RuleId {
        RuleId::new("pre-alloc-size")
    }

    fn name(&self) -> &str {
        "PreAllocSize"
    }

    fn description(&self) -> &str {
        "Ensures preAllocSize is a non-negative number of kilobytes"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();
        require_non_negative(config, "preAllocSize", &mut outcome);
        Ok(outcome)
    }
}

/// Validates the per-host client connection limit.
pub struct MaxClientCnxnsRule;

impl Rule for MaxClientCnxnsRule {
    fn id(&self) -> RuleId {
        RuleId::new("max-client-cnxns")
    }

    fn name(&self) -> &str {
        "MaxClientCnxns"
    }

    fn description(&self) -> &str {
        "Ensures maxClientCnxns is non-negative and warns when the limit is disabled"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        if require_non_negative(config, "maxClientCnxns", &mut outcome) == Some(0) {
            outcome.warn(
                "`maxClientCnxns` is 0; the per-host connection limit is disabled \
                 and a single client can exhaust the server",
            );
        }

        Ok(outcome)
    }
}

/// Validates the number of ticks followers get to connect and sync.
pub struct InitLimitRule;

impl Rule for InitLimitRule {
    fn id(&self) -> RuleId {
        RuleId::new("init-limit")
    }

    fn name(&self) -> &str {
        "InitLimit"
    }

    fn description(&self) -> &str {
        "Ensures initLimit is a non-negative number of ticks"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();
        require_non_negative(config, "initLimit", &mut outcome);
        Ok(outcome)
    }
}

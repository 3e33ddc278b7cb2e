//! Session timeout bounds validation.
//!
//! The relation `min <= max` is only checked once both bounds are valid,
//! so a missing bound is reported once and nothing cascades from it.

use super::require_non_negative;
use crate::config::ZooCfg;
use crate::error::Result;
use crate::lint::{Rule, RuleId, RuleOutcome};

const MIN_KEY: &str = "minSessionTimeout";
const MAX_KEY: &str = "maxSessionTimeout";

/// Validates the negotiable session timeout range.
pub struct SessionTimeoutRule;

impl Rule for SessionTimeoutRule {
    fn id(&self) -> RuleId {
        RuleId::new("session-timeout")
    }

    fn name(&self) -> &str {
        "SessionTimeout"
    }

    fn description(&self) -> &str {
        "Ensures session timeout bounds are non-negative and ordered"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        let min = require_non_negative(config, MIN_KEY, &mut outcome);
        let max = require_non_negative(config, MAX_KEY, &mut outcome);

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                outcome.error(format!(
                    "`{MIN_KEY}` ({min}) should not be greater than `{MAX_KEY}` ({max})"
                ));
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> RuleOutcome {
        SessionTimeoutRule.check(&ZooCfg::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn defaults_pass() {
        assert!(check("").is_clean());
    }

    #[test]
    fn equal_bounds_pass() {
        assert!(check("minSessionTimeout=10\nmaxSessionTimeout=10").is_clean());
    }

    #[test]
    fn inverted_bounds_error() {
        let outcome = check("minSessionTimeout=30\nmaxSessionTimeout=20");
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("(30)"));
        assert!(outcome.errors[0].contains("(20)"));
    }

    #[test]
    fn invalid_bound_skips_relation_check() {
        let outcome = check("minSessionTimeout=abc\nmaxSessionTimeout=-1");
        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome.errors[0].starts_with("`minSessionTimeout`"));
        assert!(outcome.errors[1].starts_with("`maxSessionTimeout`"));
    }

    #[test]
    fn one_invalid_bound_reports_only_that_bound() {
        let outcome = check("minSessionTimeout=100\nmaxSessionTimeout=x");
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("maxSessionTimeout"));
    }
}

//! Tick time validation.

use super::require_int;
use crate::config::ZooCfg;
use crate::error::Result;
use crate::lint::{Rule, RuleId, RuleOutcome};

const KEY: &str = "tickTime";

/// Validates the base time unit, in milliseconds.
pub struct TickTimeRule;

impl Rule for TickTimeRule {
    fn id(&self) -> RuleId {
        RuleId::new("tick-time")
    }

    fn name(&self) -> &str {
        "TickTime"
    }

    fn description(&self) -> &str {
        "Ensures tickTime is a positive number of milliseconds"
    }

    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome> {
        let mut outcome = RuleOutcome::new();

        if let Some(tick) = require_int(config, KEY, &mut outcome) {
            if tick <= 0 {
                outcome.error(format!("`{KEY}` should be greater than 0, found {tick}"));
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> RuleOutcome {
        TickTimeRule.check(&ZooCfg::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn passes_positive_tick() {
        assert!(check("tickTime=2000").is_clean());
    }

    #[test]
    fn errors_when_missing() {
        assert_eq!(check("").errors, vec!["`tickTime` is missing"]);
    }

    #[test]
    fn errors_on_zero_and_negative() {
        assert_eq!(check("tickTime=0").errors.len(), 1);
        assert_eq!(check("tickTime=-5").errors.len(), 1);
    }

    #[test]
    fn errors_on_non_integer() {
        let outcome = check("tickTime=2s");
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("'2s'"));
    }
}

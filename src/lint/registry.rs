//! Rule registry for managing and running rules.
//!
//! The [`RuleRegistry`] stores rules in a declared catalog order and runs
//! all of them against a configuration. A rule whose check fails is
//! reported as one synthetic error; the remaining rules still run.

use tracing::{debug, warn};

use super::result::RuleResult;
use super::rule::{Rule, RuleId};
use super::rules::{
    ClientPortRule, DataDirRule, DataLogDirRule, ElectionAlgRule, GlobalOutstandingLimitRule,
    InitLimitRule, LeaderServersRule, MaxClientCnxnsRule, PreAllocSizeRule, SessionTimeoutRule,
    SnapCountRule, TickTimeRule, TraceFileRule,
};
use crate::config::ZooCfg;

/// Registry of rules, kept in catalog order.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules in catalog order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ClientPortRule));
        registry.register(Box::new(TickTimeRule));
        registry.register(Box::new(DataDirRule));
        registry.register(Box::new(DataLogDirRule));
        registry.register(Box::new(GlobalOutstandingLimitRule));
        registry.register(Box::new(PreAllocSizeRule));
        registry.register(Box::new(SnapCountRule));
        registry.register(Box::new(TraceFileRule));
        registry.register(Box::new(MaxClientCnxnsRule));
        registry.register(Box::new(SessionTimeoutRule));
        registry.register(Box::new(InitLimitRule));
        registry.register(Box::new(ElectionAlgRule));
        registry.register(Box::new(LeaderServersRule));
        registry
    }

    /// Register a rule.
    ///
    /// A rule with an already registered ID replaces the old one in place.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn Rule> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over all rules in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and aggregate findings in catalog order.
    pub fn check_all(&self, config: &ZooCfg) -> RuleResult {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        for rule in self.iter() {
            match rule.check(config) {
                Ok(outcome) => {
                    debug!(
                        rule = rule.name(),
                        warnings = outcome.warnings.len(),
                        errors = outcome.errors.len(),
                        "rule checked"
                    );
                    warnings.extend(outcome.warnings);
                    errors.extend(outcome.errors);
                }
                Err(e) => {
                    warn!(rule = rule.name(), error = %e, "rule check failed");
                    errors.push(format!("`{}` rule check failed: {}", rule.name(), e));
                }
            }
        }

        RuleResult::new(warnings, errors)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

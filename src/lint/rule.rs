//! Rule definitions.
//!
//! This module provides the core traits and types for defining rules:
//!
//! - [`Rule`] - The trait that all rules must implement
//! - [`RuleId`] - Unique identifier for a rule
//! - [`RuleOutcome`] - Warnings and errors produced by one rule

use crate::config::ZooCfg;
use crate::error::Result;

/// Unique identifier for a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Findings produced by a single rule check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Non-fatal findings, in the order the rule produced them.
    pub warnings: Vec<String>,
    /// Fatal findings, in the order the rule produced them.
    pub errors: Vec<String>,
}

impl RuleOutcome {
    /// Create an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Record an error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Check if the rule found nothing.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

/// A named check against a configuration.
///
/// Rules are pure: they read the configuration, keep no state between
/// calls and never depend on which other rules ran. Returning `Err` means
/// the check itself could not complete; the registry reports that as a
/// single synthetic error and moves on.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Display name, used when reporting a failed check.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check the configuration and return any findings.
    fn check(&self, config: &ZooCfg) -> Result<RuleOutcome>;
}

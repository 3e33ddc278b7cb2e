//! Aggregated validation result.

use serde::Serialize;

/// Warnings and errors collected from every rule, in catalog order.
///
/// Produced once by [`RuleRegistry::check_all`](super::RuleRegistry::check_all)
/// and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl RuleResult {
    /// Create a result from already-aggregated findings.
    pub fn new(warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self { warnings, errors }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

//! Result output formatters.
//!
//! This module provides formatters for writing a [`RuleResult`] in
//! different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::RuleResult;
use std::io::Write;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting validation output.
pub trait LintFormatter {
    /// Format a result to the given writer.
    fn format<W: Write>(&self, result: &RuleResult, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;

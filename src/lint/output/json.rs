//! JSON output formatter.
//!
//! Formats validation results as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::RuleResult;
use serde::Serialize;
use std::io::Write;

/// Formats validation output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    warnings: &'a [String],
    errors: &'a [String],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    warnings: usize,
    errors: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, result: &RuleResult, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            warnings: result.warnings(),
            errors: result.errors(),
            summary: JsonSummary {
                warnings: result.warnings().len(),
                errors: result.errors().len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

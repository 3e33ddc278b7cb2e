//! Human-readable output formatter.
//!
//! Writes a `Warnings:` section (each entry followed by a blank line) and
//! an `Errors:` section, omitting whichever is empty.

use super::LintFormatter;
use crate::lint::RuleResult;
use crate::ui::ZooCfgTheme;
use std::io::Write;

/// Formats validation output for human consumption.
pub struct HumanFormatter {
    theme: ZooCfgTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: ZooCfgTheme::for_color(use_color),
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, result: &RuleResult, writer: &mut W) -> std::io::Result<()> {
        if result.has_warnings() {
            writeln!(writer, "{}", self.theme.format_warning_header("Warnings:"))?;
            for warning in result.warnings() {
                writeln!(writer, "* {}", warning)?;
                writeln!(writer)?;
            }
        }

        if result.has_errors() {
            writeln!(writer, "{}", self.theme.format_error_header("Errors:"))?;
            for error in result.errors() {
                writeln!(writer, "* {}", error)?;
            }
        }

        Ok(())
    }
}

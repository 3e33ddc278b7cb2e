//! Check command implementation.
//!
//! Loads a config file, runs every rule and renders the findings.
//!
//! # Exit codes
//!
//! - `-1` - no config file was given
//! - `2` - errors were found, or the file could not be loaded
//! - `1` - only warnings were found (and warnings were requested)
//! - `0` - nothing to report

use std::io::Write;

use tracing::{debug, warn};

use crate::cli::args::Cli;
use crate::config::{load_config_file, ZooCfg};
use crate::error::Result;
use crate::lint::{
    HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, RuleRegistry, RuleResult,
};
use crate::ui::ZooCfgTheme;

/// Exit code when no config file was supplied.
pub const EXIT_NO_CONFIG: i32 = -1;

/// Exit code when only warnings were reported.
pub const EXIT_WARNINGS: i32 = 1;

/// Exit code when errors were reported.
pub const EXIT_ERRORS: i32 = 2;

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Pick the exit code for a rendered result; errors dominate warnings.
    pub fn from_rule_result(result: &RuleResult) -> Self {
        if result.has_errors() {
            Self::failure(EXIT_ERRORS)
        } else if result.has_warnings() {
            Self::failure(EXIT_WARNINGS)
        } else {
            Self::success()
        }
    }
}

/// The check command implementation.
pub struct CheckCommand {
    args: Cli,
    use_color: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: Cli, use_color: bool) -> Self {
        Self { args, use_color }
    }

    /// Execute the command, writing results to `out` and diagnostics to `err`.
    pub fn execute<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<CommandResult> {
        let registry = RuleRegistry::with_builtins();

        if self.args.list_rules {
            self.list_rules(&registry, out)?;
            return Ok(CommandResult::success());
        }

        let Some(path) = self.args.config_file.as_deref() else {
            writeln!(err, "Config file name is mandatory.")?;
            return Ok(CommandResult::failure(EXIT_NO_CONFIG));
        };

        let config = match load_config_file(path) {
            Ok(config) => config,
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                return Ok(CommandResult::failure(EXIT_ERRORS));
            }
        };

        if self.args.show_config {
            match self.args.format {
                OutputFormat::Human => self.show_config(&config, out)?,
                OutputFormat::Json => warn!("--show-config is ignored with --format json"),
            }
        }

        let result = registry.check_all(&config);
        debug!(
            warnings = result.warnings().len(),
            errors = result.errors().len(),
            "validation finished"
        );

        let visible = if self.args.warnings {
            result
        } else {
            RuleResult::new(Vec::new(), result.errors().to_vec())
        };

        match self.args.format {
            OutputFormat::Human => HumanFormatter::new(self.use_color).format(&visible, out)?,
            OutputFormat::Json => JsonFormatter::new().format(&visible, out)?,
        }

        Ok(CommandResult::from_rule_result(&visible))
    }

    fn list_rules<O: Write>(&self, registry: &RuleRegistry, out: &mut O) -> Result<()> {
        let theme = ZooCfgTheme::for_color(self.use_color);
        for rule in registry.iter() {
            writeln!(
                out,
                "{} {} - {}",
                rule.name(),
                theme.dim.apply_to(format!("[{}]", rule.id())),
                rule.description()
            )?;
        }
        Ok(())
    }

    fn show_config<O: Write>(&self, config: &ZooCfg, out: &mut O) -> Result<()> {
        let theme = ZooCfgTheme::for_color(self.use_color);
        for (key, value) in config.iter() {
            writeln!(out, "{}={}", theme.key.apply_to(key), value)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

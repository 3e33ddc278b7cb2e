//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// zoocfg - ZooKeeper config parser and validator.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "zoocfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the zoo.cfg file to validate
    #[arg(value_name = "CONFIG_FILE", env = "ZOOCFG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Show warnings as well as errors
    #[arg(short, long)]
    pub warnings: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Print the effective configuration before the findings
    #[arg(long)]
    pub show_config: bool,

    /// List the validation rules and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

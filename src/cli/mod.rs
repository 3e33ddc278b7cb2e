//! Command-line interface for zoocfg.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the check command that drives the parse-default-validate pipeline.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - Loading, validation, rendering and exit codes

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{CheckCommand, CommandResult, EXIT_ERRORS, EXIT_NO_CONFIG, EXIT_WARNINGS};

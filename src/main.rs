//! zoocfg CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zoocfg::cli::{CheckCommand, Cli, EXIT_ERRORS};
use zoocfg::ui::should_use_colors;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with rendered results.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("zoocfg=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zoocfg=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("zoocfg starting with args: {:?}", cli);

    let use_color = !cli.no_color && should_use_colors();
    let command = CheckCommand::new(cli, use_color);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    match command.execute(&mut stdout, &mut stderr) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERRORS as u8)
        }
    }
}

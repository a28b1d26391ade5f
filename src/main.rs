//! pyverify CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pyverify::check::CheckReport;
use pyverify::cli::{CheckContext, Cli, CommandDispatcher};
use pyverify::ui::{create_ui, OutputMode, UserInterface};
use pyverify::VerifyError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so check output is not interleaved with logs
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pyverify=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pyverify=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Report a failure that happened before any check ran.
///
/// With `--json` the failure still comes out as a report.
fn report_startup_error(cli: &Cli, ui: &mut dyn UserInterface, err: &VerifyError) {
    let report = cli
        .command
        .check_kind()
        .filter(|_| cli.json)
        .map(|check| CheckReport::fail(check, err).to_json());

    match report {
        Some(Ok(line)) => ui.emit(&line),
        _ => ui.error(&format!("Error: {}", err)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pyverify starting with args: {:?}", cli);

    // JSON reports replace the human-readable lines
    let output_mode = if cli.json {
        OutputMode::Quiet
    } else {
        OutputMode::from_flags(cli.verbose, cli.quiet)
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);

    let context = match CheckContext::from_cli(&cli) {
        Ok(context) => context,
        Err(e) => {
            report_startup_error(&cli, ui.as_mut(), &e);
            return ExitCode::from(1);
        }
    };
    let dispatcher = CommandDispatcher::new(context);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

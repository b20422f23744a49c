//! json-card: post a flattened JSON document as a chat card.
//!
//! Entry point for the json-card application.

use json_card::config::{Cli, EnvConfig};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, report_run_error, setup_tracing};
use run::Prepared;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let env = EnvConfig::from_process();
    match run::prepare(&cli, &env) {
        Ok(prepared) => run_application(prepared),
        Err(e) => {
            report_run_error(&e);
            exit_code::for_run_error(&e)
        }
    }
}

/// Runs the pipeline on a single-threaded runtime.
///
/// Excluded from coverage - requires async runtime and network.
#[cfg(not(tarpaulin_include))]
fn run_application(prepared: Prepared) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(prepared)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            report_run_error(&e);
            exit_code::for_run_error(&e)
        }
    }
}

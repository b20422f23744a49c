//! Process-level concerns of the binary: exit codes, logging, and how
//! failures are shown to the user.

use json_card::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Exit statuses of `json-card`.
pub mod exit_code {
    use std::process::ExitCode;

    use crate::run::RunError;

    /// Card sent, printed, or delivery failed without escalation.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - missing webhook URL, invalid args, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - delivery failure, HTTP client setup, etc.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Input error (exit code 3) - input document missing or invalid.
    pub fn input_error() -> ExitCode {
        ExitCode::from(3)
    }

    /// Maps a pipeline failure to its exit code.
    pub fn for_run_error(error: &RunError) -> ExitCode {
        match error {
            RunError::Config(_) => CONFIG_ERROR,
            RunError::Input(_) => input_error(),
            RunError::ClientBuild(_) | RunError::Render(_) | RunError::Delivery(_) => {
                runtime_error()
            }
        }
    }
}

/// Prints a hint for configuration errors the user can fix from the shell.
fn print_config_hint(error: &ConfigError) {
    if matches!(error, ConfigError::MissingUrl) {
        eprintln!("\nExport WEBHOOK_URL or add it to a .env file in the working directory.");
    }
}

/// Reports a pipeline failure on standard error or through tracing.
///
/// Configuration and input errors go to standard error since they abort
/// before any network activity.
pub fn report_run_error(error: &RunError) {
    match error {
        RunError::Config(e) => {
            eprintln!("{error}");
            print_config_hint(e);
        }
        RunError::Input(e) => eprintln!("Error reading JSON file: {e}"),
        other => tracing::error!("{other}"),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

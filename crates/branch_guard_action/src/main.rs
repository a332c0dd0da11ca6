use branch_guard_action::config::{log_filter, process_env};
use branch_guard_action::workflow_commands::error_command;
use branch_guard_action::{run_action, ActionSettings, Cli, Error};
use branch_guard_core::RunStatus;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Exit code for a run that stopped on a configuration or event error.
const EXIT_ERROR: i32 = 2;

/// Maps the outcome of a run onto the process exit code.
fn exit_code(outcome: &Result<RunStatus, Error>) -> i32 {
    match outcome {
        Ok(RunStatus::Passed) => 0,
        Ok(RunStatus::Failed) => 1,
        Err(_) => EXIT_ERROR,
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_new(log_filter(process_env))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let outcome = match ActionSettings::resolve(cli, process_env) {
        Ok(settings) => run_action(settings).await,
        Err(e) => Err(e),
    };

    match &outcome {
        Ok(status) => info!(failed = status.is_failed(), "Branch guard finished"),
        Err(e) => {
            println!("{}", error_command(&e.to_string()));
            error!("Error: {e}");
        }
    }

    std::process::exit(exit_code(&outcome));
}

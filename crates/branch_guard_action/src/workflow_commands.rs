//! GitHub Actions workflow commands.
//!
//! The runner scans stdout for lines of the form `::command::message`. Only
//! the commands the branch guard emits are implemented.

#[cfg(test)]
#[path = "workflow_commands_tests.rs"]
mod tests;

/// Escapes a message so that it survives as a single workflow command line.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Formats an `error` command. The runner shows it as an annotation on the run.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

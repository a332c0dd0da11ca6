use branch_guard_core::ConfigurationError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can end a branch guard run before a decision is reported.
///
/// Policy violations are not represented here. They are reported through the
/// workflow and end the run with a failed status instead.
#[derive(Error, Debug)]
pub enum Error {
    /// A required policy input was missing or invalid.
    ///
    /// This error is returned when `main-branch` or `release-branches` is not
    /// supplied, or when `main-branch` is blank.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    /// Invalid command-line arguments or runner context were provided.
    ///
    /// This error is returned when, for example, the repository is not in
    /// `owner/name` form.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The GitHub client could not be created.
    #[error("GitHub client error: {0}")]
    GitHub(#[from] github_client::Error),

    /// The gate could not load the triggering event.
    #[error(transparent)]
    Gate(#[from] branch_guard_core::Error),
}

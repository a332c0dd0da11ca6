//! # Branch Guard Action
//!
//! Runs the branch policy from `branch_guard_core` inside a GitHub Actions
//! workflow. Inputs come from command-line flags or the `INPUT_*` and
//! `GITHUB_*` variables the runner sets; violations are reported as an
//! `::error::` workflow command and as a comment on the pull request.

pub mod action;
pub use action::run_action;

pub mod config;
pub use config::{ActionSettings, Cli, RepositorySlug};

pub mod errors;
pub use errors::Error;

pub mod event_source;
pub use event_source::GitHubActionsEventSource;

pub mod reporter;
pub use reporter::GitHubActionsReporter;

pub mod workflow_commands;

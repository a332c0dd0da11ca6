//! Input resolution for the branch guard action.
//!
//! Every setting can be given on the command line. When a flag is absent the
//! value is taken from the environment variables the GitHub Actions runner sets
//! for the step: action inputs as `INPUT_<NAME>` and run context as
//! `GITHUB_*`.
//!
//! Resolution takes a variable lookup function rather than reading the
//! process environment directly, so it can be tested in isolation.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use branch_guard_core::{ConfigurationError, PolicyConfiguration};
use clap::Parser;
use tracing::debug;

use crate::errors::Error;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "BRANCH_GUARD_LOG";

pub const MAIN_BRANCH_ENV: &str = "INPUT_MAIN-BRANCH";
pub const RELEASE_BRANCHES_ENV: &str = "INPUT_RELEASE-BRANCHES";
pub const GITHUB_TOKEN_INPUT_ENV: &str = "INPUT_GITHUB-TOKEN";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GITHUB_REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const GITHUB_API_URL_ENV: &str = "GITHUB_API_URL";
pub const GITHUB_EVENT_NAME_ENV: &str = "GITHUB_EVENT_NAME";
pub const GITHUB_EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";
pub const RUNNER_DEBUG_ENV: &str = "RUNNER_DEBUG";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Branch Guard: enforce branch naming rules on pull requests
#[derive(Debug, Default, Parser)]
#[command(name = "branch-guard")]
#[command(about = "Enforce branch naming rules on pull requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Trunk branch that only accepts `feature/` and `fix/` branches [env: INPUT_MAIN-BRANCH]
    #[arg(long)]
    pub main_branch: Option<String>,

    /// Comma-separated release branches that `hotfix/` branches may target [env: INPUT_RELEASE-BRANCHES]
    #[arg(long)]
    pub release_branches: Option<String>,

    /// Token used to comment on pull requests [env: INPUT_GITHUB-TOKEN, GITHUB_TOKEN]
    #[arg(long)]
    pub github_token: Option<String>,

    /// Repository in `owner/name` form [env: GITHUB_REPOSITORY]
    #[arg(long)]
    pub repository: Option<String>,

    /// GitHub REST API root [env: GITHUB_API_URL]
    #[arg(long)]
    pub api_url: Option<String>,

    /// Name of the triggering event [env: GITHUB_EVENT_NAME]
    #[arg(long)]
    pub event_name: Option<String>,

    /// Path of the JSON event payload [env: GITHUB_EVENT_PATH]
    #[arg(long)]
    pub event_path: Option<PathBuf>,
}

/// A repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepositorySlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(Error::InvalidArguments(format!(
                "repository must be in 'owner/name' form, got '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Default)]
pub struct ActionSettings {
    /// Raw `main-branch` input. `None` when it was not supplied at all.
    pub main_branch: Option<String>,
    /// Raw `release-branches` input. `None` when it was not supplied at all.
    pub release_branches: Option<String>,
    pub github_token: Option<String>,
    pub repository: Option<RepositorySlug>,
    pub api_url: Option<String>,
    pub event_name: Option<String>,
    pub event_path: Option<PathBuf>,
}

impl ActionSettings {
    /// Merges command-line flags with the environment. Flags win.
    ///
    /// Policy inputs keep empty values (an empty `release-branches` is valid);
    /// for every other setting an empty variable counts as unset.
    ///
    /// # Errors
    /// Returns `Error::InvalidArguments` if the repository is not in `owner/name` form.
    pub fn resolve<F>(cli: Cli, lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let repository = cli
            .repository
            .or_else(|| non_empty(GITHUB_REPOSITORY_ENV))
            .map(|r| r.parse::<RepositorySlug>())
            .transpose()?;

        let settings = Self {
            main_branch: cli.main_branch.or_else(|| lookup(MAIN_BRANCH_ENV)),
            release_branches: cli.release_branches.or_else(|| lookup(RELEASE_BRANCHES_ENV)),
            github_token: cli
                .github_token
                .filter(|t| !t.is_empty())
                .or_else(|| non_empty(GITHUB_TOKEN_INPUT_ENV))
                .or_else(|| non_empty(GITHUB_TOKEN_ENV)),
            repository,
            api_url: cli.api_url.or_else(|| non_empty(GITHUB_API_URL_ENV)),
            event_name: cli.event_name.or_else(|| non_empty(GITHUB_EVENT_NAME_ENV)),
            event_path: cli
                .event_path
                .or_else(|| non_empty(GITHUB_EVENT_PATH_ENV).map(PathBuf::from)),
        };

        debug!(
            main_branch = ?settings.main_branch,
            release_branches = ?settings.release_branches,
            has_token = settings.github_token.is_some(),
            repository = ?settings.repository,
            event_name = ?settings.event_name,
            event_path = ?settings.event_path,
            "Resolved action settings"
        );

        Ok(settings)
    }

    /// Builds the policy configuration from the raw inputs.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if a required input is missing or invalid.
    pub fn policy(&self) -> Result<PolicyConfiguration, ConfigurationError> {
        PolicyConfiguration::from_inputs(
            self.main_branch.as_deref(),
            self.release_branches.as_deref(),
        )
    }
}

/// Reads a variable from the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Chooses the `tracing` filter directive.
///
/// An explicit `BRANCH_GUARD_LOG` wins. Otherwise the level is `debug` when the
/// workflow was re-run with debug logging (`RUNNER_DEBUG=1`) and `info` if not.
pub fn log_filter<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(filter) = lookup(LOG_ENV_VAR).filter(|f| !f.trim().is_empty()) {
        return filter;
    }

    match lookup(RUNNER_DEBUG_ENV).as_deref() {
        Some("1") => "debug".to_string(),
        _ => "info".to_string(),
    }
}

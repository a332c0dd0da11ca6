//! Policy configuration.
//!
//! A [`PolicyConfiguration`] is resolved once per invocation from operator
//! input and then passed by reference into the decision engine. It is never
//! mutated after construction.

use std::collections::BTreeSet;

use tracing::debug;

use crate::branch::normalize_branch_name;
use crate::errors::ConfigurationError;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Name of the operator input holding the trunk branch.
pub const MAIN_BRANCH_INPUT: &str = "main-branch";

/// Name of the operator input holding the comma-separated release branches.
pub const RELEASE_BRANCHES_INPUT: &str = "release-branches";

/// The rule parameters for a single invocation.
///
/// # Examples
///
/// ```
/// use branch_guard_core::PolicyConfiguration;
///
/// let config = PolicyConfiguration::from_inputs(Some("main"), Some("release/1.0, release/2.0"))?;
/// assert_eq!(config.trunk_branch(), "main");
/// assert!(config.is_release_branch("release/2.0"));
/// # Ok::<(), branch_guard_core::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfiguration {
    trunk_branch: String,
    release_branches: BTreeSet<String>,
}

impl PolicyConfiguration {
    /// Creates a configuration from already separated values.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidInput`] if the trunk branch is empty.
    pub fn new<I, S>(trunk_branch: &str, release_branches: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trunk_branch = normalize_branch_name(trunk_branch.trim());
        if trunk_branch.is_empty() {
            return Err(ConfigurationError::invalid(
                MAIN_BRANCH_INPUT,
                "must not be empty",
            ));
        }

        let release_branches = release_branches
            .into_iter()
            .filter_map(|b| {
                let name = normalize_branch_name(b.as_ref().trim());
                (!name.is_empty()).then(|| name.to_string())
            })
            .collect();

        Ok(Self {
            trunk_branch: trunk_branch.to_string(),
            release_branches,
        })
    }

    /// Creates a configuration from the raw operator inputs.
    ///
    /// `release_branches` is a comma-separated list. Tokens are trimmed and
    /// empty tokens are dropped, so an empty input yields no release branches.
    ///
    /// # Errors
    /// - [`ConfigurationError::MissingInput`] if either input is absent.
    /// - [`ConfigurationError::InvalidInput`] if the trunk branch is blank.
    pub fn from_inputs(
        trunk_branch: Option<&str>,
        release_branches: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        let trunk_branch =
            trunk_branch.ok_or_else(|| ConfigurationError::missing(MAIN_BRANCH_INPUT))?;
        let release_branches =
            release_branches.ok_or_else(|| ConfigurationError::missing(RELEASE_BRANCHES_INPUT))?;

        let config = Self::new(trunk_branch, parse_branch_list(release_branches))?;
        debug!(
            trunk_branch = %config.trunk_branch,
            release_branches = ?config.release_branches,
            "Resolved policy configuration"
        );
        Ok(config)
    }

    /// The branch subject to the feature/fix naming convention.
    pub fn trunk_branch(&self) -> &str {
        &self.trunk_branch
    }

    /// The branches `hotfix/` branches may target, in sorted order.
    pub fn release_branches(&self) -> &BTreeSet<String> {
        &self.release_branches
    }

    /// Exact membership test against the release branch set.
    pub fn is_release_branch(&self, branch: &str) -> bool {
        self.release_branches.contains(branch)
    }
}

/// Splits a comma-separated branch list, trimming tokens and discarding empty ones.
pub fn parse_branch_list(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

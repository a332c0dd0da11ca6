//! Branch name helpers shared by the configuration, the event model and the
//! decision engine.

use std::fmt;

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;

/// Prefix carried by fully qualified branch references.
pub const HEADS_REF_PREFIX: &str = "refs/heads/";

/// Strips a single leading `refs/heads/` from a branch reference.
///
/// Names without the prefix are returned unchanged. No other normalization
/// (trimming, case folding) is applied.
///
/// # Examples
///
/// ```
/// use branch_guard_core::normalize_branch_name;
///
/// assert_eq!(normalize_branch_name("refs/heads/main"), "main");
/// assert_eq!(normalize_branch_name("feature/login"), "feature/login");
/// ```
pub fn normalize_branch_name(reference: &str) -> &str {
    reference
        .strip_prefix(HEADS_REF_PREFIX)
        .unwrap_or(reference)
}

/// The branch naming prefixes the policy knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchPrefix {
    /// `feature/` — new work targeting the trunk branch.
    Feature,
    /// `fix/` — bug fixes targeting the trunk branch.
    Fix,
    /// `hotfix/` — urgent fixes that may only target release branches.
    Hotfix,
}

impl BranchPrefix {
    /// Prefixes accepted for pull requests opened against the trunk branch.
    pub const TRUNK: [BranchPrefix; 2] = [BranchPrefix::Feature, BranchPrefix::Fix];

    /// The literal prefix, including the trailing slash.
    pub fn as_str(self) -> &'static str {
        match self {
            BranchPrefix::Feature => "feature/",
            BranchPrefix::Fix => "fix/",
            BranchPrefix::Hotfix => "hotfix/",
        }
    }

    /// Case-sensitive literal prefix match.
    pub fn matches(self, branch: &str) -> bool {
        branch.starts_with(self.as_str())
    }
}

impl fmt::Display for BranchPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

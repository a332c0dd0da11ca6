//! The branch policy decision engine.
//!
//! [`evaluate`] is a pure function: it reads the event and the configuration
//! and returns a [`Decision`]. All reporting lives in the
//! [dispatcher](crate::dispatcher).
//!
//! Rules are checked in a fixed order:
//!
//! 1. Actions other than `opened` and `edited` are ignored.
//! 2. An `opened` pull request into the trunk branch must come from a
//!    `feature/` or `fix/` branch. When this rule applies, nothing else is checked.
//! 3. A `hotfix/` branch may only target a release branch. Checked for `opened`
//!    pull requests into a release branch and for every `edited` pull request,
//!    since an edit can retarget the base branch.
//! 4. Anything else is allowed.

use crate::branch::{normalize_branch_name, BranchPrefix};
use crate::config::PolicyConfiguration;
use crate::decision::Decision;
use crate::event::{ActionKind, PullRequestEvent};

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

/// Evaluates one pull request event against the policy.
pub fn evaluate(event: &PullRequestEvent, config: &PolicyConfiguration) -> Decision {
    let base = normalize_branch_name(event.base_branch());
    let head = normalize_branch_name(event.head_branch());

    match event.action() {
        ActionKind::Other => Decision::Allow,
        ActionKind::Opened if base == config.trunk_branch() => check_trunk_naming(head),
        ActionKind::Opened if config.is_release_branch(base) => {
            check_hotfix_target(base, head, config)
        }
        ActionKind::Opened => Decision::Allow,
        ActionKind::Edited => check_hotfix_target(base, head, config),
    }
}

fn check_trunk_naming(head: &str) -> Decision {
    if BranchPrefix::TRUNK.iter().any(|p| p.matches(head)) {
        Decision::Allow
    } else {
        Decision::deny(trunk_naming_reason())
    }
}

fn check_hotfix_target(base: &str, head: &str, config: &PolicyConfiguration) -> Decision {
    if !BranchPrefix::Hotfix.matches(head) || config.is_release_branch(base) {
        return Decision::Allow;
    }

    Decision::deny(hotfix_target_reason(config))
}

/// Reason reported when a trunk pull request uses a non-conforming branch name.
pub fn trunk_naming_reason() -> String {
    format!(
        "Branch name does not start with `{}` or `{}`.",
        BranchPrefix::Feature,
        BranchPrefix::Fix
    )
}

/// Reason reported when a hotfix branch targets something other than a release branch.
pub fn hotfix_target_reason(config: &PolicyConfiguration) -> String {
    let hotfix = BranchPrefix::Hotfix;
    if config.release_branches().is_empty() {
        return format!(
            "`{hotfix}*` branches are allowed to target only release branches, but no release branches are configured."
        );
    }

    let targets = config
        .release_branches()
        .iter()
        .map(|b| format!("`{b}`"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("`{hotfix}*` branches are allowed to target only {targets} branch(es).")
}

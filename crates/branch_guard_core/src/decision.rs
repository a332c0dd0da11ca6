//! The outcome of evaluating one pull request event.

use std::fmt;

#[cfg(test)]
#[path = "decision_tests.rs"]
mod tests;

/// Accept or reject a pull request's branch pairing.
///
/// `Allow` covers both "compliant" and "no rule applies"; the engine does not
/// distinguish them for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: String },
}

impl Decision {
    /// Returns a deny decision carrying `reason`.
    #[must_use]
    pub fn deny(reason: impl Into<String>) -> Self {
        Decision::Deny {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    #[must_use]
    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny { .. })
    }

    /// The deny reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Deny { reason } => Some(reason),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => f.write_str("allow"),
            Decision::Deny { reason } => write!(f, "deny: {reason}"),
        }
    }
}

/// Final status of one gate invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Failed,
}

impl RunStatus {
    pub fn is_failed(self) -> bool {
        self == RunStatus::Failed
    }
}

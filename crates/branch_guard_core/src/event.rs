//! Event model and the [`EventSource`] collaborator.

use std::fmt;

use crate::errors::EventSourceError;

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

/// The pull request lifecycle action that triggered the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Opened,
    Edited,
    /// Any action the gate was not asked to police (`synchronize`, `closed`, ...).
    Other,
}

impl ActionKind {
    /// Classifies a webhook `action` value. Matching is exact.
    pub fn from_action(action: &str) -> Self {
        match action {
            "opened" => ActionKind::Opened,
            "edited" => ActionKind::Edited,
            _ => ActionKind::Other,
        }
    }
}

impl From<&str> for ActionKind {
    fn from(action: &str) -> Self {
        Self::from_action(action)
    }
}

/// Identifies the pull request a comment should be posted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PullRequestId(u64);

impl PullRequestId {
    pub fn new(number: u64) -> Self {
        Self(number)
    }

    /// The pull request number.
    pub fn number(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PullRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One pull request lifecycle event.
///
/// Branch names are kept exactly as supplied. Consumers that compare them
/// normalize with [`normalize_branch_name`](crate::normalize_branch_name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    action: ActionKind,
    base_branch: String,
    head_branch: String,
    pull_request_id: PullRequestId,
}

impl PullRequestEvent {
    pub fn new(
        action: ActionKind,
        base_branch: &str,
        head_branch: &str,
        pull_request_id: PullRequestId,
    ) -> Self {
        Self {
            action,
            base_branch: base_branch.to_string(),
            head_branch: head_branch.to_string(),
            pull_request_id,
        }
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    /// The branch the pull request targets.
    pub fn base_branch(&self) -> &str {
        &self.base_branch
    }

    /// The branch the pull request merges from.
    pub fn head_branch(&self) -> &str {
        &self.head_branch
    }

    pub fn pull_request_id(&self) -> PullRequestId {
        self.pull_request_id
    }
}

/// The triggering event of an invocation, as classified by an [`EventSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A pull request lifecycle event. The only kind that is evaluated.
    PullRequest(PullRequestEvent),
    /// A push to `git_ref`. Logged, never evaluated.
    Push { git_ref: String },
    /// Any other trigger, identified by its event name.
    Other { name: String },
}

/// Supplies the triggering event for the current invocation.
pub trait EventSource {
    /// Loads and classifies the event that triggered this invocation.
    ///
    /// # Errors
    /// Returns an [`EventSourceError`] when the runtime context is missing or
    /// the payload cannot be read or parsed. This is fatal to the invocation.
    fn load_event(&self) -> Result<TriggerEvent, EventSourceError>;
}

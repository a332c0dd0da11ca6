//! Turns a [`Decision`] into side effects through a [`Reporter`].

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::decision::{Decision, RunStatus};
use crate::errors::ReporterError;
use crate::event::{PullRequestEvent, PullRequestId};

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;

/// Performs the externally visible effects of a policy violation.
#[async_trait]
pub trait Reporter: Send + Sync {
    /// Marks the current run as failed with `message` as its failure text.
    fn fail_run(&self, message: &str);

    /// Posts `body` as a comment on the given pull request.
    ///
    /// # Errors
    /// Returns a [`ReporterError`] if the comment could not be created. The
    /// dispatcher logs and discards it.
    async fn post_comment(
        &self,
        pull_request: PullRequestId,
        body: &str,
    ) -> Result<(), ReporterError>;
}

/// Dispatches one decision for `event`.
///
/// `Allow` does nothing. `Deny` fails the run and then tries to comment on the
/// pull request; a comment failure is logged and never changes the returned
/// status.
#[instrument(skip_all, fields(pull_request = %event.pull_request_id()))]
pub async fn dispatch(
    decision: &Decision,
    event: &PullRequestEvent,
    reporter: &dyn Reporter,
) -> RunStatus {
    let reason = match decision {
        Decision::Allow => {
            info!("Pull request satisfies the branch policy");
            return RunStatus::Passed;
        }
        Decision::Deny { reason } => reason,
    };

    warn!(
        base_branch = event.base_branch(),
        head_branch = event.head_branch(),
        reason = reason.as_str(),
        "Pull request violates the branch policy"
    );
    reporter.fail_run(reason);

    if let Err(e) = reporter
        .post_comment(event.pull_request_id(), reason)
        .await
    {
        warn!(error = %e, "Failed to post policy violation comment");
    }

    RunStatus::Failed
}

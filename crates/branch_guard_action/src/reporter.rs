//! Reports policy violations back to GitHub.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use branch_guard_core::{PullRequestId, Reporter, ReporterError};
use github_client::IssueCommentClient;
use tracing::{error, info, instrument, warn};

use crate::config::RepositorySlug;
use crate::workflow_commands::error_command;

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;

/// A [`Reporter`] for a GitHub Actions run.
///
/// Failing the run writes an `::error::` workflow command to the output
/// (stdout unless replaced) and records that the run must exit non-zero.
/// Comments are posted through an [`IssueCommentClient`] when both a client
/// and the repository are known.
pub struct GitHubActionsReporter {
    client: Option<Arc<dyn IssueCommentClient>>,
    repository: Option<RepositorySlug>,
    output: Mutex<Box<dyn Write + Send>>,
    failed: AtomicBool,
}

impl GitHubActionsReporter {
    pub fn new(
        client: Option<Arc<dyn IssueCommentClient>>,
        repository: Option<RepositorySlug>,
    ) -> Self {
        Self::with_output(client, repository, Box::new(io::stdout()))
    }

    /// Creates a reporter that writes workflow commands to `output`.
    pub fn with_output(
        client: Option<Arc<dyn IssueCommentClient>>,
        repository: Option<RepositorySlug>,
        output: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            client,
            repository,
            output: Mutex::new(output),
            failed: AtomicBool::new(false),
        }
    }

    /// Whether [`Reporter::fail_run`] has been called.
    pub fn has_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Reporter for GitHubActionsReporter {
    fn fail_run(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        error!(message = message, "Failing the workflow run");

        match self.output.lock() {
            Ok(mut output) => {
                if let Err(e) = writeln!(output, "{}", error_command(message))
                    .and_then(|_| output.flush())
                {
                    warn!(error = %e, "Failed to write workflow error command");
                }
            }
            Err(_) => warn!("Workflow command output is unavailable"),
        }
    }

    #[instrument(skip(self, body), fields(pull_request = %pull_request))]
    async fn post_comment(
        &self,
        pull_request: PullRequestId,
        body: &str,
    ) -> Result<(), ReporterError> {
        let client = self.client.as_ref().ok_or_else(|| {
            ReporterError::NotConfigured("no GitHub token was provided".to_string())
        })?;
        let repository = self.repository.as_ref().ok_or_else(|| {
            ReporterError::NotConfigured("the repository is unknown".to_string())
        })?;

        let comment = client
            .create_issue_comment(
                &repository.owner,
                &repository.name,
                pull_request.number(),
                body,
            )
            .await
            .map_err(|e| ReporterError::Api(e.to_string()))?;

        info!(
            repository = %repository,
            comment_url = comment.html_url.as_str(),
            "Posted policy violation comment"
        );
        Ok(())
    }
}

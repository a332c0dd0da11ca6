//! Wires the GitHub Actions collaborators into one gate run.

use std::sync::Arc;

use branch_guard_core::{run_gate, RunStatus};
use github_client::{create_token_client, GitHubClient, IssueCommentClient};
use tracing::{info, instrument, warn};

use crate::config::ActionSettings;
use crate::errors::Error;
use crate::event_source::GitHubActionsEventSource;
use crate::reporter::GitHubActionsReporter;

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;

/// Runs the branch guard once with the given settings.
///
/// # Errors
/// Returns an error if the policy inputs are invalid, the GitHub client cannot
/// be created, or the triggering event cannot be loaded. A policy violation is
/// not an error; it is returned as [`RunStatus::Failed`].
#[instrument(skip(settings), fields(repository = ?settings.repository, event_name = ?settings.event_name))]
pub async fn run_action(settings: ActionSettings) -> Result<RunStatus, Error> {
    let policy = settings.policy()?;
    info!(
        trunk_branch = policy.trunk_branch(),
        release_branches = ?policy.release_branches(),
        "Loaded branch policy"
    );

    let client = comment_client(&settings)?;
    let reporter = GitHubActionsReporter::new(client, settings.repository.clone());
    let event_source = GitHubActionsEventSource::new(settings.event_name, settings.event_path);

    let status = run_gate(&policy, &event_source, &reporter).await?;
    Ok(status)
}

fn comment_client(settings: &ActionSettings) -> Result<Option<Arc<dyn IssueCommentClient>>, Error> {
    let Some(token) = settings.github_token.as_deref() else {
        warn!("No GitHub token available, policy violations will not be commented on");
        return Ok(None);
    };

    let octocrab = create_token_client(token, settings.api_url.as_deref())?;
    let client: Arc<dyn IssueCommentClient> = Arc::new(GitHubClient::new(octocrab));
    Ok(Some(client))
}

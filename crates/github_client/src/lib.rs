//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making token-authenticated requests to GitHub,
//! as used from inside a GitHub Actions run. It only exposes the operations the
//! branch guard needs.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;
use models::{CreateCommentPayload, IssueComment};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A client for interacting with the GitHub API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` around an authenticated `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build the `Octocrab` instance.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

/// Trait for creating comments on issues and pull requests.
#[async_trait]
pub trait IssueCommentClient: Send + Sync {
    /// Creates a comment on an issue or pull request.
    ///
    /// Pull requests are issues as far as the comments API is concerned, so
    /// `issue_number` is the pull request number.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    /// * `issue_number` - The issue or pull request number.
    /// * `body` - The markdown body of the comment.
    ///
    /// # Errors
    ///
    /// - `Error::AuthError` if the token is rejected or lacks permission
    /// - `Error::NotFound` if the repository or pull request is not visible
    /// - `Error::RateLimitExceeded` if GitHub throttles the request
    /// - `Error::ApiError` for any other failure
    async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<IssueComment, Error>;
}

#[async_trait]
impl IssueCommentClient for GitHubClient {
    #[instrument(skip(self, body), fields(owner = %owner, repo = %repo, issue_number = issue_number))]
    async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<IssueComment, Error> {
        let path = format!("/repos/{}/{}/issues/{}/comments", owner, repo, issue_number);
        debug!("Making API call to: {}", path);

        let payload = CreateCommentPayload { body };
        let response: OctocrabResult<IssueComment> = self.client.post(path, Some(&payload)).await;
        match response {
            Ok(comment) => {
                info!(
                    comment_id = comment.id,
                    url = comment.html_url.as_str(),
                    "Created comment"
                );
                Ok(comment)
            }
            Err(e) => Err(map_octocrab_error("Failed to create issue comment", e)),
        }
    }
}

/// Creates an `Octocrab` client authenticated with a personal or installation token.
///
/// Inside GitHub Actions the token is usually the workflow's `GITHUB_TOKEN`.
///
/// # Arguments
///
/// * `token` - The token to authenticate with.
/// * `base_uri` - The API root, for example the value of `GITHUB_API_URL` on
///   GitHub Enterprise Server. `None` uses `https://api.github.com`.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URI is invalid or the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient, Error};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let octocrab = create_token_client("ghs_example", None)?;
///     let client = GitHubClient::new(octocrab);
///     Ok(())
/// }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    let mut builder = Octocrab::builder();
    if let Some(uri) = base_uri {
        builder = builder.base_uri(uri).map_err(|e| {
            error!(base_uri = uri, error = %e, "Invalid GitHub API base URI");
            Error::AuthError(format!("Invalid GitHub API base URI '{}': {}", uri, e))
        })?;
    }

    builder
        .personal_token(token.to_string())
        .build()
        .map_err(|e| {
            error!(error = ?e, "Failed to build Octocrab client with token credentials");
            Error::AuthError("Failed to build the GitHub client.".to_string())
        })
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            let status = err.status_code.as_u16();
            error!(
                error_message = err.message,
                status = status,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            );
            match status {
                401 | 403 if err.message.to_lowercase().contains("rate limit") => {
                    Error::RateLimitExceeded
                }
                401 | 403 => Error::AuthError(err.message),
                404 => Error::NotFound,
                429 => Error::RateLimitExceeded,
                _ => Error::ApiError(err.message),
            }
        }
        _ => {
            error!(error_message = e.to_string(), message);
            Error::ApiError(e.to_string())
        }
    }
}

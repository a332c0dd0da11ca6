//! # Models
//!
//! Data models returned by the GitHub client. They carry only the fields the
//! branch guard reads and ignore everything else GitHub sends.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A comment on an issue or pull request.
///
/// # Examples
///
/// ```rust
/// use github_client::models::{IssueComment, User};
///
/// let comment = IssueComment {
///     id: 1,
///     body: Some("Branch name does not start with `feature/` or `fix/`.".to_string()),
///     html_url: "https://github.com/octo/repo/pull/7#issuecomment-1".to_string(),
///     user: Some(User { id: 41898282, login: "github-actions[bot]".to_string() }),
/// };
///
/// assert!(comment.body.unwrap().contains("feature/"));
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IssueComment {
    /// The unique ID of the comment
    pub id: u64,
    /// The markdown body of the comment
    #[serde(default)]
    pub body: Option<String>,
    /// Link to the comment in the GitHub UI
    pub html_url: String,
    /// The account that wrote the comment
    #[serde(default)]
    pub user: Option<User>,
}

/// Represents a GitHub user account.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct User {
    /// The unique numeric ID of the user
    pub id: u64,
    /// The login name of the user
    pub login: String,
}

/// Request body for creating an issue comment.
#[derive(Debug, Serialize)]
pub(crate) struct CreateCommentPayload<'a> {
    pub(crate) body: &'a str,
}

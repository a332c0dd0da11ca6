//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate. Octocrab errors are logged with their full detail where
//! they occur and mapped onto these coarser variants.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.create_issue_comment("owner", "repo", 12, "body").await {
///     Ok(comment) => println!("Comment created: {}", comment.html_url),
///     Err(Error::AuthError(msg)) => eprintln!("Authentication failed: {}", msg),
///     Err(Error::RateLimitExceeded) => eprintln!("Rate limit exceeded, retry later"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A GitHub API request failed for a reason not covered by the other variants.
    ///
    /// The contained string is the message returned by GitHub, or a description of
    /// the transport failure.
    #[error("API request failed: {0}")]
    ApiError(String),

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - The token is invalid or expired
    /// - The token lacks the permissions for the request (for example
    ///   `pull-requests: write` for comments)
    /// - The client could not be built
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The GitHub API returned a response in an unexpected format.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// GitHub also answers 404 when the resource exists but is not visible
    /// with the current credentials.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

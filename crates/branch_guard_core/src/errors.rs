//! Error types for branch policy evaluation.
//!
//! Only [`ConfigurationError`] and [`EventSourceError`] are allowed to end an
//! invocation abnormally. A policy violation is not an error at all, it is the
//! [`Decision::Deny`](crate::Decision::Deny) variant. [`ReporterError`] is
//! absorbed by the dispatcher.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while building a [`PolicyConfiguration`](crate::PolicyConfiguration)
/// from raw operator input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A required input was not supplied at all.
    #[error("Required configuration missing: {name}")]
    MissingInput { name: String },

    /// A required input was supplied but contains no usable value.
    #[error("Invalid configuration: {name} - {reason}")]
    InvalidInput { name: String, reason: String },
}

impl ConfigurationError {
    /// Creates a [`ConfigurationError::MissingInput`] for the named input.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingInput { name: name.into() }
    }

    /// Creates a [`ConfigurationError::InvalidInput`] for the named input.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while retrieving the triggering event from the automation runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventSourceError {
    /// The runtime did not provide a required piece of context.
    #[error("Event context missing: {name}")]
    MissingContext { name: String },

    /// The event payload could not be read.
    #[error("Failed to read event payload: {path} - {reason}")]
    ReadPayload { path: String, reason: String },

    /// The event payload was read but does not have the expected shape.
    #[error("Failed to parse event payload for '{event_name}': {reason}")]
    ParsePayload { event_name: String, reason: String },
}

/// Errors returned by a [`Reporter`](crate::Reporter) when a best-effort side
/// effect could not be performed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReporterError {
    /// The reporter lacks the context (credentials, repository) for the operation.
    #[error("Reporter is not configured: {0}")]
    NotConfigured(String),

    /// The hosting platform rejected or failed the request.
    #[error("Hosting platform request failed: {0}")]
    Api(String),
}

/// Fatal errors for a single gate invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    EventSource(#[from] EventSourceError),
}

/// Result type alias for gate operations.
pub type GateResult<T> = Result<T, Error>;

//! Reads the triggering event from the GitHub Actions runner.

use std::fs;
use std::path::PathBuf;

use branch_guard_core::{
    ActionKind, EventSource, EventSourceError, PullRequestEvent, PullRequestId, TriggerEvent,
};
use serde::Deserialize;
use tracing::{debug, error, instrument};

use crate::config::{GITHUB_EVENT_NAME_ENV, GITHUB_EVENT_PATH_ENV};

#[cfg(test)]
#[path = "event_source_tests.rs"]
mod tests;

/// Event names that carry a pull request payload.
const PULL_REQUEST_EVENTS: [&str; 2] = ["pull_request", "pull_request_target"];
const PUSH_EVENT: &str = "push";

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    action: String,
    #[serde(default)]
    number: Option<u64>,
    pull_request: PullRequestDetails,
}

#[derive(Debug, Deserialize)]
struct PullRequestDetails {
    #[serde(default)]
    number: Option<u64>,
    base: BranchRef,
    head: BranchRef,
}

#[derive(Debug, Deserialize)]
struct BranchRef {
    #[serde(rename = "ref")]
    git_ref: String,
}

#[derive(Debug, Deserialize)]
struct PushPayload {
    #[serde(rename = "ref")]
    git_ref: String,
}

/// An [`EventSource`] backed by the event name and payload file the runner
/// exposes as `GITHUB_EVENT_NAME` and `GITHUB_EVENT_PATH`.
#[derive(Debug, Clone, Default)]
pub struct GitHubActionsEventSource {
    event_name: Option<String>,
    event_path: Option<PathBuf>,
}

impl GitHubActionsEventSource {
    pub fn new(event_name: Option<String>, event_path: Option<PathBuf>) -> Self {
        Self {
            event_name,
            event_path,
        }
    }

    fn read_payload(&self, event_name: &str) -> Result<serde_json::Value, EventSourceError> {
        let path = self.event_path.as_ref().ok_or_else(|| {
            EventSourceError::MissingContext {
                name: GITHUB_EVENT_PATH_ENV.to_string(),
            }
        })?;

        let contents = fs::read_to_string(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to read event payload");
            EventSourceError::ReadPayload {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let payload: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| parse_error(event_name, e))?;
        debug!(event_name = event_name, payload = %payload, "Loaded event payload");

        Ok(payload)
    }
}

impl EventSource for GitHubActionsEventSource {
    #[instrument(skip(self), fields(event_name = ?self.event_name))]
    fn load_event(&self) -> Result<TriggerEvent, EventSourceError> {
        let event_name = self.event_name.as_deref().ok_or_else(|| {
            EventSourceError::MissingContext {
                name: GITHUB_EVENT_NAME_ENV.to_string(),
            }
        })?;

        if PULL_REQUEST_EVENTS.contains(&event_name) {
            let payload = self.read_payload(event_name)?;
            let payload: PullRequestPayload =
                serde_json::from_value(payload).map_err(|e| parse_error(event_name, e))?;
            return pull_request_event(event_name, payload).map(TriggerEvent::PullRequest);
        }

        if event_name == PUSH_EVENT {
            let payload = self.read_payload(event_name)?;
            let payload: PushPayload =
                serde_json::from_value(payload).map_err(|e| parse_error(event_name, e))?;
            return Ok(TriggerEvent::Push {
                git_ref: payload.git_ref,
            });
        }

        Ok(TriggerEvent::Other {
            name: event_name.to_string(),
        })
    }
}

fn pull_request_event(
    event_name: &str,
    payload: PullRequestPayload,
) -> Result<PullRequestEvent, EventSourceError> {
    let number = payload
        .number
        .or(payload.pull_request.number)
        .ok_or_else(|| EventSourceError::ParsePayload {
            event_name: event_name.to_string(),
            reason: "pull request number is missing".to_string(),
        })?;

    Ok(PullRequestEvent::new(
        ActionKind::from_action(&payload.action),
        &payload.pull_request.base.git_ref,
        &payload.pull_request.head.git_ref,
        PullRequestId::new(number),
    ))
}

fn parse_error(event_name: &str, e: serde_json::Error) -> EventSourceError {
    error!(event_name = event_name, error = %e, "Failed to parse event payload");
    EventSourceError::ParsePayload {
        event_name: event_name.to_string(),
        reason: e.to_string(),
    }
}

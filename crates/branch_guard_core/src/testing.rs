//! Test doubles for the collaborator traits.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::dispatcher::Reporter;
use crate::errors::{EventSourceError, ReporterError};
use crate::event::{EventSource, PullRequestId, TriggerEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    FailRun(String),
    PostComment(u64, String),
}

/// Records every reporter call; optionally fails comment posts.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    calls: Mutex<Vec<Call>>,
    comment_error: Option<ReporterError>,
}

impl RecordingReporter {
    pub(crate) fn failing_comments(error: ReporterError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            comment_error: Some(error),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Reporter for RecordingReporter {
    fn fail_run(&self, message: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::FailRun(message.to_string()));
    }

    async fn post_comment(
        &self,
        pull_request: PullRequestId,
        body: &str,
    ) -> Result<(), ReporterError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::PostComment(pull_request.number(), body.to_string()));
        match &self.comment_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// Returns a fixed result from `load_event`.
pub(crate) struct FixedEventSource(pub(crate) Result<TriggerEvent, EventSourceError>);

impl EventSource for FixedEventSource {
    fn load_event(&self) -> Result<TriggerEvent, EventSourceError> {
        self.0.clone()
    }
}

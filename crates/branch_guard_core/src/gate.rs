//! Runs one gate invocation end to end.

use tracing::{debug, info, instrument};

use crate::config::PolicyConfiguration;
use crate::decision::RunStatus;
use crate::dispatcher::{dispatch, Reporter};
use crate::engine::evaluate;
use crate::errors::GateResult;
use crate::event::{EventSource, TriggerEvent};

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;

/// Loads the triggering event, evaluates it and dispatches the decision.
///
/// Push and other triggers are logged and pass without touching the reporter.
///
/// # Errors
/// Returns [`Error::EventSource`](crate::Error::EventSource) if the event
/// cannot be loaded. Policy violations are not errors; they are reported
/// through `reporter` and surface as [`RunStatus::Failed`].
#[instrument(skip_all, fields(trunk_branch = config.trunk_branch()))]
pub async fn run_gate(
    config: &PolicyConfiguration,
    event_source: &dyn EventSource,
    reporter: &dyn Reporter,
) -> GateResult<RunStatus> {
    let event = event_source.load_event()?;

    match event {
        TriggerEvent::PullRequest(event) => {
            info!(
                action = ?event.action(),
                base_branch = event.base_branch(),
                head_branch = event.head_branch(),
                pull_request = %event.pull_request_id(),
                "Evaluating pull request"
            );
            let decision = evaluate(&event, config);
            debug!(decision = %decision, "Evaluated branch policy");
            Ok(dispatch(&decision, &event, reporter).await)
        }
        TriggerEvent::Push { git_ref } => {
            info!(git_ref = git_ref.as_str(), "Push event, nothing to evaluate");
            Ok(RunStatus::Passed)
        }
        TriggerEvent::Other { name } => {
            info!(event_name = name.as_str(), "Ignoring unsupported event");
            Ok(RunStatus::Passed)
        }
    }
}

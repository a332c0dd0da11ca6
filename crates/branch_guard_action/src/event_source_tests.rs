use super::*;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn payload_file(payload: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", payload).unwrap();
    file
}

fn pull_request_payload(action: &str, base: &str, head: &str) -> serde_json::Value {
    json!({
        "action": action,
        "number": 42,
        "pull_request": {
            "number": 42,
            "title": "Add login page",
            "base": { "ref": base, "sha": "abc123" },
            "head": { "ref": head, "sha": "def456" }
        },
        "repository": { "full_name": "octo/repo" }
    })
}

fn source_for(event_name: &str, file: &NamedTempFile) -> GitHubActionsEventSource {
    GitHubActionsEventSource::new(
        Some(event_name.to_string()),
        Some(file.path().to_path_buf()),
    )
}

#[test]
fn test_opened_pull_request() {
    let file = payload_file(&pull_request_payload("opened", "main", "feature/login"));

    let event = source_for("pull_request", &file).load_event().unwrap();

    assert_eq!(
        event,
        TriggerEvent::PullRequest(PullRequestEvent::new(
            ActionKind::Opened,
            "main",
            "feature/login",
            PullRequestId::new(42),
        ))
    );
}

#[test]
fn test_edited_pull_request_target() {
    let file = payload_file(&pull_request_payload("edited", "develop", "hotfix/urgent"));

    let event = source_for("pull_request_target", &file).load_event().unwrap();

    match event {
        TriggerEvent::PullRequest(pr) => {
            assert_eq!(pr.action(), ActionKind::Edited);
            assert_eq!(pr.base_branch(), "develop");
            assert_eq!(pr.head_branch(), "hotfix/urgent");
        }
        other => panic!("Expected pull request event, got {other:?}"),
    }
}

#[test]
fn test_synchronize_is_classified_as_other_action() {
    let file = payload_file(&pull_request_payload("synchronize", "main", "bugfix/x"));

    let event = source_for("pull_request", &file).load_event().unwrap();

    match event {
        TriggerEvent::PullRequest(pr) => assert_eq!(pr.action(), ActionKind::Other),
        other => panic!("Expected pull request event, got {other:?}"),
    }
}

#[test]
fn test_number_falls_back_to_pull_request_number() {
    let file = payload_file(&json!({
        "action": "opened",
        "pull_request": {
            "number": 7,
            "base": { "ref": "main" },
            "head": { "ref": "fix/typo" }
        }
    }));

    let event = source_for("pull_request", &file).load_event().unwrap();

    match event {
        TriggerEvent::PullRequest(pr) => assert_eq!(pr.pull_request_id(), PullRequestId::new(7)),
        other => panic!("Expected pull request event, got {other:?}"),
    }
}

#[test]
fn test_missing_number_is_a_parse_error() {
    let file = payload_file(&json!({
        "action": "opened",
        "pull_request": {
            "base": { "ref": "main" },
            "head": { "ref": "fix/typo" }
        }
    }));

    let result = source_for("pull_request", &file).load_event();

    assert!(matches!(
        result,
        Err(EventSourceError::ParsePayload { event_name, .. }) if event_name == "pull_request"
    ));
}

#[test]
fn test_push_event() {
    let file = payload_file(&json!({
        "ref": "refs/heads/main",
        "before": "abc123",
        "after": "def456"
    }));

    let event = source_for("push", &file).load_event().unwrap();

    assert_eq!(
        event,
        TriggerEvent::Push {
            git_ref: "refs/heads/main".to_string()
        }
    );
}

#[test]
fn test_unsupported_event_does_not_read_payload() {
    let source = GitHubActionsEventSource::new(Some("workflow_dispatch".to_string()), None);

    let event = source.load_event().unwrap();

    assert_eq!(
        event,
        TriggerEvent::Other {
            name: "workflow_dispatch".to_string()
        }
    );
}

#[test]
fn test_missing_event_name() {
    let source = GitHubActionsEventSource::default();

    let result = source.load_event();

    assert_eq!(
        result,
        Err(EventSourceError::MissingContext {
            name: "GITHUB_EVENT_NAME".to_string()
        })
    );
}

#[test]
fn test_missing_event_path() {
    let source = GitHubActionsEventSource::new(Some("pull_request".to_string()), None);

    let result = source.load_event();

    assert_eq!(
        result,
        Err(EventSourceError::MissingContext {
            name: "GITHUB_EVENT_PATH".to_string()
        })
    );
}

#[test]
fn test_unreadable_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let source = GitHubActionsEventSource::new(Some("pull_request".to_string()), Some(path));

    let result = source.load_event();

    assert!(matches!(result, Err(EventSourceError::ReadPayload { .. })));
}

#[test]
fn test_invalid_json_payload() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let result = source_for("pull_request", &file).load_event();

    assert!(matches!(result, Err(EventSourceError::ParsePayload { .. })));
}

#[test]
fn test_payload_without_pull_request_is_a_parse_error() {
    let file = payload_file(&json!({ "action": "opened", "number": 1 }));

    let result = source_for("pull_request", &file).load_event();

    assert!(matches!(result, Err(EventSourceError::ParsePayload { .. })));
}

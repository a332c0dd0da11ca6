use super::*;

#[test]
fn test_action_kind_classification() {
    assert_eq!(ActionKind::from_action("opened"), ActionKind::Opened);
    assert_eq!(ActionKind::from_action("edited"), ActionKind::Edited);
    assert_eq!(ActionKind::from_action("synchronize"), ActionKind::Other);
    assert_eq!(ActionKind::from_action("reopened"), ActionKind::Other);
    assert_eq!(ActionKind::from_action("closed"), ActionKind::Other);
    assert_eq!(ActionKind::from_action(""), ActionKind::Other);
}

#[test]
fn test_action_kind_classification_is_exact() {
    assert_eq!(ActionKind::from("Opened"), ActionKind::Other);
    assert_eq!(ActionKind::from(" edited"), ActionKind::Other);
}

#[test]
fn test_pull_request_event_keeps_branches_as_supplied() {
    let event = PullRequestEvent::new(
        ActionKind::Opened,
        "refs/heads/main",
        "feature/login",
        PullRequestId::new(42),
    );

    assert_eq!(event.action(), ActionKind::Opened);
    assert_eq!(event.base_branch(), "refs/heads/main");
    assert_eq!(event.head_branch(), "feature/login");
    assert_eq!(event.pull_request_id().number(), 42);
}

#[test]
fn test_pull_request_event_accessors() {
    let event = PullRequestEvent::new(
        ActionKind::Edited,
        "release/1.0",
        "hotfix/urgent",
        PullRequestId::new(7),
    );

    assert_eq!(event.base_branch(), "release/1.0");
    assert_eq!(event.head_branch(), "hotfix/urgent");
}

#[test]
fn test_pull_request_id_display() {
    assert_eq!(PullRequestId::new(12).to_string(), "#12");
}

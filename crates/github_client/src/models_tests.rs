use super::*;
use serde_json::{from_str, to_string};

#[test]
fn test_issue_comment_deserialization_ignores_unknown_fields() {
    let json_str = r#"{
        "id": 1081119361,
        "node_id": "IC_kwDOA",
        "url": "https://api.github.com/repos/octo/repo/issues/comments/1081119361",
        "html_url": "https://github.com/octo/repo/pull/7#issuecomment-1081119361",
        "body": "Branch name does not start with `feature/` or `fix/`.",
        "user": { "id": 41898282, "login": "github-actions[bot]", "type": "Bot" },
        "created_at": "2024-03-28T10:00:00Z"
    }"#;

    let comment: IssueComment = from_str(json_str).expect("Failed to deserialize IssueComment");

    assert_eq!(comment.id, 1081119361);
    assert_eq!(
        comment.body.as_deref(),
        Some("Branch name does not start with `feature/` or `fix/`.")
    );
    assert_eq!(
        comment.user.map(|u| u.login),
        Some("github-actions[bot]".to_string())
    );
}

#[test]
fn test_issue_comment_optional_fields() {
    let json_str = r#"{ "id": 2, "html_url": "https://github.com/octo/repo/pull/7#issuecomment-2" }"#;

    let comment: IssueComment = from_str(json_str).expect("Failed to deserialize IssueComment");

    assert!(comment.body.is_none());
    assert!(comment.user.is_none());
}

#[test]
fn test_create_comment_payload_serialization() {
    let payload = CreateCommentPayload { body: "nope" };

    let json_str = to_string(&payload).expect("Failed to serialize payload");

    assert_eq!(json_str, r#"{"body":"nope"}"#);
}

#[test]
fn test_user_deserialization() {
    let json_str = r#"{
        "id": 404,
        "login": "contributor"
    }"#;

    let user: User = from_str(json_str).expect("Failed to deserialize User");

    assert_eq!(user.id, 404);
    assert_eq!(user.login, "contributor");
}

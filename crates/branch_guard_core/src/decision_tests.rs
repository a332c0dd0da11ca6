use super::*;

#[test]
fn test_allow_has_no_reason() {
    let decision = Decision::Allow;
    assert!(decision.is_allow());
    assert!(!decision.is_deny());
    assert_eq!(decision.reason(), None);
    assert_eq!(decision.to_string(), "allow");
}

#[test]
fn test_deny_carries_reason() {
    let decision = Decision::deny("Branch name does not start with `feature/` or `fix/`.");
    assert!(decision.is_deny());
    assert!(!decision.is_allow());
    assert_eq!(
        decision.reason(),
        Some("Branch name does not start with `feature/` or `fix/`.")
    );
    assert_eq!(
        decision.to_string(),
        "deny: Branch name does not start with `feature/` or `fix/`."
    );
}

#[test]
fn test_run_status() {
    assert!(RunStatus::Failed.is_failed());
    assert!(!RunStatus::Passed.is_failed());
}

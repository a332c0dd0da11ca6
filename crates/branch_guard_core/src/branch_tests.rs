use super::*;

#[test]
fn test_normalize_strips_heads_prefix() {
    assert_eq!(normalize_branch_name("refs/heads/main"), "main");
    assert_eq!(
        normalize_branch_name("refs/heads/release/1.0"),
        "release/1.0"
    );
}

#[test]
fn test_normalize_leaves_short_names_alone() {
    assert_eq!(normalize_branch_name("main"), "main");
    assert_eq!(normalize_branch_name("feature/login"), "feature/login");
    assert_eq!(normalize_branch_name(""), "");
}

#[test]
fn test_normalize_strips_only_one_leading_prefix() {
    assert_eq!(
        normalize_branch_name("refs/heads/refs/heads/main"),
        "refs/heads/main"
    );
    assert_eq!(normalize_branch_name("x/refs/heads/main"), "x/refs/heads/main");
    assert_eq!(normalize_branch_name("refs/tags/v1"), "refs/tags/v1");
}

#[test]
fn test_prefix_literals() {
    assert_eq!(BranchPrefix::Feature.as_str(), "feature/");
    assert_eq!(BranchPrefix::Fix.as_str(), "fix/");
    assert_eq!(BranchPrefix::Hotfix.as_str(), "hotfix/");
    assert_eq!(BranchPrefix::Hotfix.to_string(), "hotfix/");
}

#[test]
fn test_prefix_match_is_case_sensitive_and_literal() {
    assert!(BranchPrefix::Feature.matches("feature/login"));
    assert!(BranchPrefix::Feature.matches("feature/"));
    assert!(!BranchPrefix::Feature.matches("Feature/login"));
    assert!(!BranchPrefix::Feature.matches(" feature/login"));
    assert!(!BranchPrefix::Feature.matches("feature"));
    assert!(!BranchPrefix::Fix.matches("bugfix/login"));
    assert!(!BranchPrefix::Fix.matches("fixes/login"));
    assert!(BranchPrefix::Hotfix.matches("hotfix/urgent"));
    assert!(!BranchPrefix::Hotfix.matches("HOTFIX/urgent"));
}

#[test]
fn test_trunk_prefixes() {
    assert_eq!(
        BranchPrefix::TRUNK,
        [BranchPrefix::Feature, BranchPrefix::Fix]
    );
}

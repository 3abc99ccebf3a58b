use super::*;

// =============================================================
// Resumed navigation
// =============================================================

#[test]
fn destination_resumes_interrupted_navigation() {
    assert_eq!(login_destination(Some("/adminPage")), "/adminPage");
    assert_eq!(login_destination(Some("/post/42")), "/post/42");
}

#[test]
fn destination_defaults_to_homepage() {
    assert_eq!(login_destination(None), "/homepage");
    assert_eq!(login_destination(Some("")), "/homepage");
}

// =============================================================
// Credential validation
// =============================================================

#[test]
fn validate_credentials_trims_both_fields() {
    assert_eq!(
        validate_credentials("  alice  ", " hunter2 "),
        Ok(("alice".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_credentials("alice", "   "), Err("Enter both username and password."));
}

use super::*;

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("alice"), "/internal/users/alice");
}

#[test]
fn password_endpoint_formats_expected_path() {
    assert_eq!(password_endpoint("alice"), "/internal/users/alice/password");
}

#[test]
fn post_and_search_endpoints_format_expected_paths() {
    assert_eq!(post_endpoint("42"), "/internal/posts/42");
    assert_eq!(search_endpoint("ferris"), "/internal/posts/search/ferris");
}

#[test]
fn community_and_messages_endpoints_format_expected_paths() {
    assert_eq!(community_endpoint("general"), "/internal/communities/general");
    assert_eq!(messages_endpoint("bob"), "/internal/messages/bob");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
}

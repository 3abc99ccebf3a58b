use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.username.is_none());
}

#[test]
fn signed_in_carries_username() {
    let state = AuthState::signed_in("alice".to_owned());
    assert_eq!(state.username.as_deref(), Some("alice"));
}

#[test]
fn signed_out_is_default() {
    let state = AuthState::signed_in("alice".to_owned());
    assert_ne!(state, AuthState::default());
    assert_eq!(AuthState { username: None }, AuthState::default());
}

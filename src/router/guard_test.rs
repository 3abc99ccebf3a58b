use super::*;

// =============================================================
// Protected routes
// =============================================================

#[test]
fn protected_route_without_flag_redirects_to_login_with_next_url() {
    let decision = decide(Access::RequiresAuth, false, "/adminPage");
    assert_eq!(decision, Decision::ToLogin { next_url: "/adminPage".to_owned() });
}

#[test]
fn protected_route_with_flag_proceeds() {
    assert_eq!(decide(Access::RequiresAuth, true, "/homepage"), Decision::Proceed);
}

#[test]
fn protected_param_route_without_flag_carries_full_path() {
    let decision = decide(Access::RequiresAuth, false, "/post/42");
    assert_eq!(decision, Decision::ToLogin { next_url: "/post/42".to_owned() });
}

// =============================================================
// Guest-only routes
// =============================================================

#[test]
fn guest_route_without_flag_proceeds() {
    assert_eq!(decide(Access::GuestOnly, false, "/login"), Decision::Proceed);
}

#[test]
fn guest_route_with_flag_redirects_home() {
    assert_eq!(decide(Access::GuestOnly, true, "/login"), Decision::ToHome);
    assert_eq!(decide(Access::GuestOnly, true, "/register"), Decision::ToHome);
}

// =============================================================
// Unrestricted routes
// =============================================================

#[test]
fn public_route_proceeds_regardless_of_flag() {
    assert_eq!(decide(Access::Public, false, "/"), Decision::Proceed);
    assert_eq!(decide(Access::Public, true, "/"), Decision::Proceed);
    assert_eq!(decide(Access::Public, false, "/changePasswordForm"), Decision::Proceed);
    assert_eq!(decide(Access::Public, true, "/displayRecoveryKey"), Decision::Proceed);
}

// =============================================================
// Redirect path formatting
// =============================================================

#[test]
fn login_redirect_path_attaches_next_url_query() {
    assert_eq!(login_redirect_path("/adminPage"), "/login?nextUrl=/adminPage");
}

#[test]
fn login_redirect_path_keeps_nested_paths_intact() {
    assert_eq!(
        login_redirect_path("/community/rust-beginners"),
        "/login?nextUrl=/community/rust-beginners"
    );
}

use super::*;
use crate::router::guard::{Decision, decide};

// =============================================================
// Static matches
// =============================================================

#[test]
fn root_resolves_to_landing() {
    let matched = resolve("/");
    assert_eq!(matched.route.name, RouteName::Landing);
    assert_eq!(matched.route.access, Access::Public);
    assert!(matched.params.is_empty());
}

#[test]
fn login_and_register_are_guest_only() {
    assert_eq!(resolve("/login").route.access, Access::GuestOnly);
    assert_eq!(resolve("/register").route.access, Access::GuestOnly);
}

#[test]
fn homepage_and_admin_require_auth() {
    assert_eq!(resolve("/homepage").route.name, RouteName::Homepage);
    assert_eq!(resolve("/homepage").route.access, Access::RequiresAuth);
    assert_eq!(resolve("/adminPage").route.name, RouteName::AdminPage);
    assert_eq!(resolve("/adminPage").route.access, Access::RequiresAuth);
}

#[test]
fn password_and_recovery_pages_have_no_restriction() {
    assert_eq!(resolve("/changePasswordForm").route.access, Access::Public);
    assert_eq!(resolve("/displayRecoveryKey").route.access, Access::Public);
}

// =============================================================
// Parameter capture
// =============================================================

#[test]
fn post_route_captures_postid() {
    let matched = resolve("/post/42");
    assert_eq!(matched.route.name, RouteName::FullPostPage);
    assert_eq!(matched.param("postid"), Some("42"));
}

#[test]
fn user_and_community_routes_capture_ids() {
    assert_eq!(resolve("/user/alice").param("userID"), Some("alice"));
    assert_eq!(
        resolve("/community/rust-beginners").param("communityID"),
        Some("rust-beginners")
    );
}

#[test]
fn search_route_captures_term_and_requires_auth() {
    let matched = resolve("/search/ferris");
    assert_eq!(matched.route.name, RouteName::SearchPage);
    assert_eq!(matched.route.access, Access::RequiresAuth);
    assert_eq!(matched.param("searchTerm"), Some("ferris"));
}

#[test]
fn query_string_does_not_affect_matching() {
    let matched = resolve("/login?nextUrl=/adminPage");
    assert_eq!(matched.route.name, RouteName::Login);
}

// =============================================================
// Catch-all
// =============================================================

#[test]
fn unknown_path_resolves_to_404() {
    assert_eq!(resolve("/unknown/path").route.name, RouteName::Page404);
    assert_eq!(resolve("/posts").route.name, RouteName::Page404);
}

#[test]
fn partial_param_route_falls_through_to_404() {
    assert_eq!(resolve("/post").route.name, RouteName::Page404);
    assert_eq!(resolve("/post/1/extra").route.name, RouteName::Page404);
}

#[test]
fn wildcard_entry_is_last() {
    let last = ROUTES.last().unwrap();
    assert_eq!(last.path, "/*");
    assert_eq!(last.name, RouteName::Page404);
}

// =============================================================
// End-to-end guard scenarios over the real table
// =============================================================

#[test]
fn admin_page_without_flag_redirects_to_login_with_next_url() {
    let matched = resolve("/adminPage");
    let decision = decide(matched.route.access, false, "/adminPage");
    assert_eq!(decision, Decision::ToLogin { next_url: "/adminPage".to_owned() });
}

#[test]
fn login_with_flag_redirects_to_homepage() {
    let matched = resolve("/login");
    assert_eq!(decide(matched.route.access, true, "/login"), Decision::ToHome);
}

#[test]
fn every_protected_route_is_gated_and_every_guest_route_bounces() {
    for route in ROUTES {
        match route.access {
            Access::RequiresAuth => {
                assert!(matches!(
                    decide(route.access, false, route.path),
                    Decision::ToLogin { .. }
                ));
                assert_eq!(decide(route.access, true, route.path), Decision::Proceed);
            }
            Access::GuestOnly => {
                assert_eq!(decide(route.access, false, route.path), Decision::Proceed);
                assert_eq!(decide(route.access, true, route.path), Decision::ToHome);
            }
            Access::Public => {
                assert_eq!(decide(route.access, false, route.path), Decision::Proceed);
                assert_eq!(decide(route.access, true, route.path), Decision::Proceed);
            }
        }
    }
}

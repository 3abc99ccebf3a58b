//! Navigation guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated once per navigation attempt, before the target route commits.
//! Pure: the caller supplies the matched access rule and the current auth
//! flag, keeping this testable without a browser or a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::router::table::Access;

/// Path of the login page unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Path authenticated users land on when bounced off guest-only pages.
pub const HOME_PATH: &str = "/homepage";

/// Query parameter carrying the originally requested path through the
/// login redirect, so the login flow can resume navigation afterwards.
pub const NEXT_URL_PARAM: &str = "nextUrl";

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Commit the navigation to the requested route.
    Proceed,
    /// Send the visitor to the login page, remembering where they were
    /// headed.
    ToLogin { next_url: String },
    /// Send an already-authenticated user to the home page.
    ToHome,
}

/// Decide what to do with a navigation to `path` given the matched route's
/// access rule and whether the auth flag is currently set.
pub fn decide(access: Access, logged_in: bool, path: &str) -> Decision {
    match access {
        Access::RequiresAuth if !logged_in => Decision::ToLogin { next_url: path.to_owned() },
        Access::GuestOnly if logged_in => Decision::ToHome,
        Access::RequiresAuth | Access::GuestOnly | Access::Public => Decision::Proceed,
    }
}

/// Build the login redirect target for an interrupted navigation,
/// e.g. `/login?nextUrl=/adminPage`.
pub fn login_redirect_path(next_url: &str) -> String {
    format!("{LOGIN_PATH}?{NEXT_URL_PARAM}={next_url}")
}

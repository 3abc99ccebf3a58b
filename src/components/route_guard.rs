//! Navigation guard wiring for the route tree.
//!
//! Wraps every page in the router. On each navigation the current path is
//! resolved against the route table and the guard decision is applied:
//! render the page, bounce to `/login` with `nextUrl`, or bounce
//! authenticated users to `/homepage`.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::router::guard::{Decision, HOME_PATH, decide, login_redirect_path};
use crate::router::table::resolve;
use crate::session::Session;

/// Gate `children` behind the navigation guard.
///
/// Re-evaluates whenever the location changes, so a logout followed by an
/// in-page navigation is caught without a reload.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let matched = resolve(&path);
        match decide(matched.route.access, session.logged_in(), &path) {
            Decision::Proceed => children(),
            Decision::ToLogin { next_url } => {
                view! { <Redirect path=login_redirect_path(&next_url)/> }.into_any()
            }
            Decision::ToHome => view! { <Redirect path=HOME_PATH.to_owned()/> }.into_any(),
        }
    }
}

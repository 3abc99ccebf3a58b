//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::pages::{
    admin::AdminPage, change_password::ChangePasswordForm, chat::ChatDialoguePage,
    community::CommunityPage, home::HomePage, landing::LandingPage, login::LoginPage,
    not_found::Page404, post::FullPostPage, profile::ProfilePage,
    recovery_key::DisplayRecoveryKey, register::RegisterPage, search::SearchPage,
};
use crate::session::Session;
use crate::state::auth::AuthState;
use crate::theme;

/// Root application component.
///
/// Provides the session store and auth state contexts, applies the stored
/// theme, and sets up client-side routing. Every page sits behind
/// [`RouteGuard`], which mirrors the route table in `router::table`; the
/// table's `/*` catch-all corresponds to the router fallback here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::browser());
    provide_context(RwSignal::new(AuthState::default()));

    theme::apply(theme::read_preference());

    view! {
        <Stylesheet id="commune" href="/assets/commune.css"/>
        <Title text="Commune"/>

        <Router>
            <Routes fallback=|| view! { <RouteGuard><Page404/></RouteGuard> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RouteGuard><LandingPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <RouteGuard><RegisterPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("homepage")
                    view=|| view! { <RouteGuard><HomePage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("adminPage")
                    view=|| view! { <RouteGuard><AdminPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("changePasswordForm")
                    view=|| view! { <RouteGuard><ChangePasswordForm/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("displayRecoveryKey")
                    view=|| view! { <RouteGuard><DisplayRecoveryKey/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("post"), ParamSegment("postid"))
                    view=|| view! { <RouteGuard><FullPostPage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("search"), ParamSegment("searchTerm"))
                    view=|| view! { <RouteGuard><SearchPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("chatDialogue")
                    view=|| view! { <RouteGuard><ChatDialoguePage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("user"), ParamSegment("userID"))
                    view=|| view! { <RouteGuard><ProfilePage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("community"), ParamSegment("communityID"))
                    view=|| view! { <RouteGuard><CommunityPage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}

//! Top navigation bar with auth-aware links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{LOGGED_IN_KEY, Session};
use crate::state::auth::AuthState;
use crate::theme;

/// Navigation bar shown on authenticated pages.
///
/// Logout clears the local auth flag first so the guard takes over
/// immediately, then tells the backend to drop the server session.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let mode = RwSignal::new(theme::read_preference());

    let on_logout = move |_| {
        session.clear(LOGGED_IN_KEY);
        crate::util::cookies::clear(crate::pages::login::REMEMBERED_USER_COOKIE);
        auth.set(AuthState::default());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async {
            crate::net::api::logout().await;
        });

        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/homepage">"Commune"</a>
            <div class="nav-bar__links">
                <a href="/homepage">"Feed"</a>
                <a href="/chatDialogue">"Chat"</a>
                <Show when=move || auth.get().username.is_some()>
                    <span class="nav-bar__user">
                        {move || auth.get().username.unwrap_or_default()}
                    </span>
                </Show>
            </div>
            <button
                class="nav-bar__theme"
                on:click=move |_| mode.set(theme::toggle(mode.get()))
            >
                {move || match mode.get() {
                    theme::ThemeMode::Light => "Dark",
                    theme::ThemeMode::Dark => "Light",
                }}
            </button>
            <button class="nav-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}

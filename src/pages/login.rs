//! Login page.
//!
//! Reads the `nextUrl` query parameter left by the navigation guard so an
//! interrupted navigation resumes once the user signs in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::router::guard::{HOME_PATH, NEXT_URL_PARAM};
use crate::session::Session;
use crate::state::auth::AuthState;
use crate::util::cookies;

/// Cookie remembering the last signed-in username for form prefill.
pub const REMEMBERED_USER_COOKIE: &str = "rememberedUser";

/// Where to go after a successful login: the interrupted path if the
/// guard recorded one, otherwise the home page.
fn login_destination(next_url: Option<&str>) -> String {
    match next_url {
        Some(path) if !path.is_empty() => path.to_owned(),
        _ => HOME_PATH.to_owned(),
    }
}

/// Trim and require both credential fields.
fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(cookies::get(REMEMBERED_USER_COOKIE).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_credentials(&username.get(), &password.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let destination = login_destination(query.get().get(NEXT_URL_PARAM).as_deref());

        #[cfg(feature = "csr")]
        {
            use leptos_router::NavigateOptions;

            use crate::session::LOGGED_IN_KEY;

            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user, &pass).await {
                    Ok(()) => {
                        session.set(LOGGED_IN_KEY, "true");
                        cookies::set(REMEMBERED_USER_COOKIE, &user);
                        auth.set(AuthState::signed_in(user));
                        navigate(&destination, NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Sign in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, pass, destination, &session, &navigate, &auth);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

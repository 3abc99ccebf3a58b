//! Registration page.
//!
//! On success the backend issues a recovery key; it is stashed in the
//! session store so `/displayRecoveryKey` can show it exactly once.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::Session;

/// Session key holding a freshly issued recovery key.
pub const RECOVERY_KEY: &str = "recoveryKey";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user = username.get().trim().to_owned();
        let pass = password.get().trim().to_owned();
        if user.is_empty() || pass.is_empty() {
            info.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            use leptos_router::NavigateOptions;

            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_user(&user, &pass).await {
                    Ok(recovery_key) => {
                        session.set(RECOVERY_KEY, &recovery_key);
                        navigate("/displayRecoveryKey", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Registration failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, pass, &session, &navigate);
        }
    };

    view! {
        <div class="register-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
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
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

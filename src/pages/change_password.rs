//! Password change form, reachable without a session via recovery key.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn ChangePasswordForm() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let recovery_key = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user = username.get().trim().to_owned();
        let pass = new_password.get().trim().to_owned();
        let key = recovery_key.get().trim().to_owned();
        if user.is_empty() || pass.is_empty() || key.is_empty() {
            info.set("All fields are required.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Updating password...".to_owned());

        #[cfg(feature = "csr")]
        {
            use leptos_router::NavigateOptions;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::change_password(&user, &pass, &key).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(e) => {
                        info.set(format!("Password change failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, pass, key, &navigate);
        }
    };

    view! {
        <div class="change-password-page">
            <div class="login-card">
                <h1>"Change password"</h1>
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
                        placeholder="new password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="recovery key"
                        prop:value=move || recovery_key.get()
                        on:input=move |ev| recovery_key.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Update"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

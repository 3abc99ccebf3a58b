//! Displays the recovery key issued at registration.
//!
//! The key is read from the session store where the register page stashed
//! it, and cleared once shown so it cannot be re-displayed later.

use leptos::prelude::*;

use crate::pages::register::RECOVERY_KEY;
use crate::session::Session;

#[component]
pub fn DisplayRecoveryKey() -> impl IntoView {
    let session = expect_context::<Session>();
    let key = session.get(RECOVERY_KEY);
    session.clear(RECOVERY_KEY);

    view! {
        <div class="recovery-key-page">
            <div class="login-card">
                <h1>"Your recovery key"</h1>
                {match key {
                    Some(key) => {
                        view! {
                            <p class="recovery-key-page__key">{key}</p>
                            <p>
                                "Store this somewhere safe. It is the only way to reset "
                                "your password and it will not be shown again."
                            </p>
                        }
                            .into_any()
                    }
                    None => view! { <p>"No recovery key to display."</p> }.into_any(),
                }}
                <a class="btn btn--primary" href="/login">"Continue to sign in"</a>
            </div>
        </div>
    }
}

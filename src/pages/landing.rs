//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Commune"</h1>
            <p>"A federated home for your communities."</p>
            <div class="landing-page__actions">
                <a class="btn btn--primary" href="/login">"Sign in"</a>
                <a class="btn" href="/register">"Create an account"</a>
            </div>
        </div>
    }
}

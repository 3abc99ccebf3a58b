//! Catch-all 404 page.

use leptos::prelude::*;

#[component]
pub fn Page404() -> impl IntoView {
    view! {
        <div class="page-404">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href="/">"Back to the landing page"</a>
        </div>
    }
}

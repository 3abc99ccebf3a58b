//! Admin page listing communities on this host.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn AdminPage() -> impl IntoView {
    let communities = LocalResource::new(|| crate::net::api::fetch_communities());

    view! {
        <div class="admin-page">
            <NavBar/>
            <main>
                <h1>"Administration"</h1>
                <h2>"Communities"</h2>
                <Suspense fallback=move || view! { <p>"Loading communities..."</p> }>
                    {move || {
                        communities
                            .get()
                            .map(|list| match list {
                                Some(communities) if !communities.is_empty() => {
                                    view! {
                                        <ul class="admin-page__communities">
                                            {communities
                                                .into_iter()
                                                .map(|c| {
                                                    let href = format!("/community/{}", c.id);
                                                    view! {
                                                        <li>
                                                            <a href=href>{c.title}</a>
                                                            <span>{c.description}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                _ => view! { <p>"No communities."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

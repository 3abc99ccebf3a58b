//! Search results page for `/search/:searchTerm`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;

#[component]
pub fn SearchPage() -> impl IntoView {
    let params = use_params_map();
    let term = move || params.get().get("searchTerm").unwrap_or_default();
    let results = LocalResource::new(move || {
        let term = term();
        async move { crate::net::api::search_posts(&term).await }
    });

    view! {
        <div class="search-page">
            <NavBar/>
            <main>
                <h1>"Results for " {term}</h1>
                <Suspense fallback=move || view! { <p>"Searching..."</p> }>
                    {move || {
                        results
                            .get()
                            .map(|list| match list {
                                Some(posts) if !posts.is_empty() => {
                                    posts
                                        .into_iter()
                                        .map(|post| view! { <PostCard post=post/> })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                                _ => view! { <p>"Nothing matched."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

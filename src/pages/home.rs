//! Home feed page listing recent posts.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;

#[component]
pub fn HomePage() -> impl IntoView {
    let posts = LocalResource::new(|| crate::net::api::fetch_posts());

    view! {
        <div class="home-page">
            <NavBar/>
            <main class="home-page__feed">
                <h1>"Feed"</h1>
                <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                    {move || {
                        posts
                            .get()
                            .map(|list| match list {
                                Some(posts) if !posts.is_empty() => {
                                    posts
                                        .into_iter()
                                        .map(|post| view! { <PostCard post=post/> })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                                _ => view! { <p>"No posts yet."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

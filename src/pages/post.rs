//! Full post page for `/post/:postid`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;

#[component]
pub fn FullPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = LocalResource::new(move || {
        let id = params.get().get("postid").unwrap_or_default();
        async move { crate::net::api::fetch_post(&id).await }
    });

    view! {
        <div class="post-page">
            <NavBar/>
            <main>
                <Suspense fallback=move || view! { <p>"Loading post..."</p> }>
                    {move || {
                        post.get()
                            .map(|found| match found {
                                Some(post) => view! { <PostCard post=post/> }.into_any(),
                                None => view! { <p>"Post not found."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

//! Community page for `/community/:communityID`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let params = use_params_map();
    let community = LocalResource::new(move || {
        let id = params.get().get("communityID").unwrap_or_default();
        async move { crate::net::api::fetch_community(&id).await }
    });

    view! {
        <div class="community-page">
            <NavBar/>
            <main>
                <Suspense fallback=move || view! { <p>"Loading community..."</p> }>
                    {move || {
                        community
                            .get()
                            .map(|found| match found {
                                Some(community) => {
                                    view! {
                                        <div class="community-page__header">
                                            <h1>{community.title.clone()}</h1>
                                            <p>{community.description.clone()}</p>
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => view! { <p>"Community not found."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

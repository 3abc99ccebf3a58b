//! Profile page for `/user/:userID`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let user = LocalResource::new(move || {
        let id = params.get().get("userID").unwrap_or_default();
        async move { crate::net::api::fetch_user(&id).await }
    });

    view! {
        <div class="profile-page">
            <NavBar/>
            <main>
                <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                    {move || {
                        user.get()
                            .map(|found| match found {
                                Some(user) => {
                                    view! {
                                        <div class="profile-page__card">
                                            <h1>{user.username.clone()}</h1>
                                            <p class="profile-page__host">{format!("@{}", user.host)}</p>
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => view! { <p>"User not found."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

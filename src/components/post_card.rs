//! Card rendering one post and its content blocks.

use leptos::prelude::*;

use crate::components::markdown::Markdown;
use crate::net::types::{Post, PostContent};

/// Post summary card linking to the full post page.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/post/{}", post.id);
    let author = format!("{}@{}", post.author.username, post.author.host);

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <a class="post-card__title" href=href>{post.title.clone()}</a>
                <span class="post-card__author">{author}</span>
            </header>
            <div class="post-card__body">
                {post
                    .content
                    .iter()
                    .map(|block| render_block(block))
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}

fn render_block(block: &PostContent) -> AnyView {
    match block {
        PostContent::Text(text) => {
            view! { <p class="post-card__text">{text.text.clone()}</p> }.into_any()
        }
        PostContent::Markdown(md) => {
            view! { <Markdown source=md.text.clone()/> }.into_any()
        }
    }
}

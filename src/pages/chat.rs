//! Chat dialogue page: message inbox plus a selected conversation.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::types::{Message, PostContent};

/// One line of preview text for a message body.
fn preview_text(content: &PostContent) -> &str {
    match content {
        PostContent::Text(text) => &text.text,
        PostContent::Markdown(md) => &md.text,
    }
}

#[component]
pub fn ChatDialoguePage() -> impl IntoView {
    let inbox = LocalResource::new(|| crate::net::api::fetch_inbox());

    // Username of the conversation currently open, if any.
    let selected = RwSignal::new(None::<String>);
    let conversation = LocalResource::new(move || {
        let user = selected.get();
        async move {
            match user {
                Some(user) => crate::net::api::fetch_messages(&user).await,
                None => None,
            }
        }
    });

    view! {
        <div class="chat-page">
            <NavBar/>
            <main class="chat-page__layout">
                <section class="chat-page__inbox-pane">
                    <h1>"Messages"</h1>
                    <Suspense fallback=move || view! { <p>"Loading messages..."</p> }>
                        {move || {
                            inbox
                                .get()
                                .map(|list| match list {
                                    Some(messages) if !messages.is_empty() => {
                                        view! {
                                            <ul class="chat-page__inbox">
                                                {messages
                                                    .into_iter()
                                                    .map(|m| {
                                                        view! { <InboxRow message=m selected=selected/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                            .into_any()
                                    }
                                    _ => view! { <p>"No messages yet."</p> }.into_any(),
                                })
                        }}
                    </Suspense>
                </section>
                <Show when=move || selected.get().is_some()>
                    <section class="chat-page__conversation">
                        <h2>{move || selected.get().unwrap_or_default()}</h2>
                        <Suspense fallback=move || view! { <p>"Loading conversation..."</p> }>
                            {move || {
                                conversation
                                    .get()
                                    .map(|history| match history {
                                        Some(messages) if !messages.is_empty() => {
                                            messages
                                                .into_iter()
                                                .map(|m| view! { <MessageBubble message=m/> })
                                                .collect::<Vec<_>>()
                                                .into_any()
                                        }
                                        _ => view! { <p>"No history with this user."</p> }.into_any(),
                                    })
                            }}
                        </Suspense>
                    </section>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn InboxRow(message: Message, selected: RwSignal<Option<String>>) -> impl IntoView {
    let sender = message.sender.username.clone();
    let preview = preview_text(&message.content).to_owned();
    let row_class =
        if message.read { "chat-page__row" } else { "chat-page__row chat-page__row--unread" };

    view! {
        <li class=row_class>
            <button
                class="chat-page__open"
                on:click=move |_| selected.set(Some(sender.clone()))
            >
                {message.sender.username.clone()}
            </button>
            <span class="chat-page__title">{message.title.clone()}</span>
            <span class="chat-page__preview">{preview}</span>
        </li>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let body = preview_text(&message.content).to_owned();

    view! {
        <div class="chat-page__bubble">
            <span class="chat-page__bubble-sender">{message.sender.username.clone()}</span>
            <p>{body}</p>
        </div>
    }
}

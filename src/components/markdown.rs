//! Markdown rendering component.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

/// Render a markdown source string as sanitized HTML.
#[component]
pub fn Markdown(#[prop(into)] source: Signal<String>) -> impl IntoView {
    let rendered = move || render_markdown_html(&source.get());
    view! { <div class="markdown-body" inner_html=rendered></div> }
}

/// Convert markdown to an HTML string.
///
/// Tables, strikethrough, and task lists are enabled. Raw inline/block
/// HTML events are dropped before rendering since post bodies come from
/// other users.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared content surfaces while reading
//! shared state from Leptos context providers. `route_guard` is the
//! navigation-facing shell over `router::guard`.

pub mod markdown;
pub mod nav_bar;
pub mod post_card;
pub mod route_guard;

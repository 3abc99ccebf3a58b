//! # commune-client
//!
//! Leptos + WASM frontend for the Commune federated community platform.
//! Pure client-side rendering: the crate builds as a plain rlib by default
//! so the routing/session logic can be unit tested natively, and as a
//! `cdylib` with the `csr` feature for the browser bundle.
//!
//! The interesting piece is the navigation guard: a static route table
//! (`router::table`) plus a pure decision function (`router::guard`) that
//! gates protected routes behind the locally stored `loggedIn` flag and
//! keeps guest-only pages (login, register) away from signed-in users.

pub mod app;
pub mod boot;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
pub mod theme;
pub mod util;

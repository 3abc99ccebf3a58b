//! Route table and navigation guard.
//!
//! DESIGN
//! ======
//! Routing is data driven: `table` declares the ordered list of route
//! descriptors with their access metadata, and `guard` is a pure function
//! from (access, auth flag) to a navigation decision. The Leptos wiring in
//! `components::route_guard` is a thin shell over these two modules.

pub mod guard;
pub mod table;

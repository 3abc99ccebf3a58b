//! Networking modules for the backend's internal HTTP surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against `/internal`, `types` defines the
//! shared wire schema the backend serves.

pub mod api;
pub mod types;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (param reads, fetches,
//! form handling) and delegates rendering details to `components`. Access
//! control never lives here; the route tree wraps every page in
//! `RouteGuard`.

pub mod admin;
pub mod change_password;
pub mod chat;
pub mod community;
pub mod home;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod post;
pub mod profile;
pub mod recovery_key;
pub mod register;
pub mod search;

//! REST API helpers for the backend's `/internal` surface.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Outside the browser: stubs returning `None`/error, these endpoints are
//! only meaningful from the bundle.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade page content without crashing the app. Setting and
//! clearing the session's `loggedIn` flag is the caller's job; this module
//! only talks HTTP.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Community, Message, Post, User};

#[cfg(feature = "csr")]
#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[cfg(feature = "csr")]
#[derive(serde::Serialize)]
struct CreateUserRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[cfg(feature = "csr")]
#[derive(serde::Serialize)]
struct ChangePasswordRequest<'a> {
    new_password: &'a str,
    recovery_key: &'a str,
}

fn user_endpoint(id: &str) -> String {
    format!("/internal/users/{id}")
}

fn password_endpoint(id: &str) -> String {
    format!("/internal/users/{id}/password")
}

fn post_endpoint(id: &str) -> String {
    format!("/internal/posts/{id}")
}

fn search_endpoint(term: &str) -> String {
    format!("/internal/posts/search/{term}")
}

fn community_endpoint(id: &str) -> String {
    format!("/internal/communities/{id}")
}

fn messages_endpoint(user_id: &str) -> String {
    format!("/internal/messages/{user_id}")
}

fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Authenticate via `POST /internal/login`.
///
/// # Errors
///
/// Returns a display message when the request fails or is rejected.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/internal/login")
            .json(&LoginRequest { username, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}

/// End the server-side session via `GET /internal/logout`.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::get("/internal/logout").send().await;
    }
}

/// Register a new account via `POST /internal/users`. Returns the recovery
/// key the backend issues for the account.
///
/// # Errors
///
/// Returns a display message when the request fails or is rejected.
pub async fn create_user(username: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/internal/users")
            .json(&CreateUserRequest { username, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("registration", resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Change a user's password via `POST /internal/users/{id}/password`.
///
/// # Errors
///
/// Returns a display message when the request fails or is rejected.
pub async fn change_password(
    user_id: &str,
    new_password: &str,
    recovery_key: &str,
) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&password_endpoint(user_id))
            .json(&ChangePasswordRequest { new_password, recovery_key })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("password change", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user_id, new_password, recovery_key);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch a user by id. Returns `None` on any failure.
pub async fn fetch_user(user_id: &str) -> Option<User> {
    fetch_json(&user_endpoint(user_id)).await
}

/// Fetch a single post by id.
pub async fn fetch_post(post_id: &str) -> Option<Post> {
    fetch_json(&post_endpoint(post_id)).await
}

/// Fetch the bulk post listing for the home feed.
pub async fn fetch_posts() -> Option<Vec<Post>> {
    fetch_json("/internal/posts").await
}

/// Search posts by term.
pub async fn search_posts(term: &str) -> Option<Vec<Post>> {
    fetch_json(&search_endpoint(term)).await
}

/// Fetch all known communities.
pub async fn fetch_communities() -> Option<Vec<Community>> {
    fetch_json("/internal/communities").await
}

/// Fetch one community by id.
pub async fn fetch_community(community_id: &str) -> Option<Community> {
    fetch_json(&community_endpoint(community_id)).await
}

/// Fetch the signed-in user's full message inbox.
pub async fn fetch_inbox() -> Option<Vec<Message>> {
    fetch_json("/internal/messages").await
}

/// Fetch the chat history with another user.
pub async fn fetch_messages(user_id: &str) -> Option<Vec<Message>> {
    fetch_json(&messages_endpoint(user_id)).await
}

#[cfg(feature = "csr")]
async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        log::debug!("GET {url} returned {}", resp.status());
        return None;
    }
    resp.json::<T>().await.ok()
}

#[cfg(not(feature = "csr"))]
async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let _ = url;
    None
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication display state for the current user.
///
/// Provided as an `RwSignal` context. This mirrors the session's
/// `loggedIn` flag for rendering (nav bar, profile links); the navigation
/// guard reads the flag from the session store directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub username: Option<String>,
}

impl AuthState {
    /// State right after a successful login.
    pub fn signed_in(username: String) -> Self {
        Self { username: Some(username) }
    }
}

//! Injected session storage.
//!
//! DESIGN
//! ======
//! The auth flag lives in browser `localStorage`, written by the login and
//! logout flows and read by the navigation guard. Access goes through the
//! [`SessionStore`] trait so the guard wiring can be exercised against an
//! in-memory store in tests. This layer never interprets the flag's value:
//! presence means logged in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// localStorage key signalling authenticated state. Set by the login flow,
/// cleared on logout.
pub const LOGGED_IN_KEY: &str = "loggedIn";

/// Minimal key/value session storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// Shared handle to the active session store, provided via Leptos context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Session backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self { store: Arc::new(BrowserSession) }
    }

    /// Session backed by an in-memory map, for tests.
    pub fn in_memory() -> Self {
        Self { store: Arc::new(MemorySession::default()) }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    pub fn set(&self, key: &str, value: &str) {
        self.store.set(key, value);
    }

    pub fn clear(&self, key: &str) {
        self.store.clear(key);
    }

    /// Whether the auth flag is present. The guard treats any non-null
    /// value as logged in, matching the login flow's contract.
    pub fn logged_in(&self) -> bool {
        self.get(LOGGED_IN_KEY).is_some()
    }
}

/// `localStorage`-backed store. Outside the browser every read misses and
/// writes are dropped, mirroring how other browser glue degrades here.
struct BrowserSession;

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store used by unit tests.
#[derive(Default)]
struct MemorySession {
    values: Mutex<HashMap<String, String>>,
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }

    fn clear(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

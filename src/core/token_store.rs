//! Persistent storage for the bearer token
//!
//! The console keeps exactly one credential: an opaque bearer token under a
//! single localStorage key. The store is injected wherever the token is
//! needed so tests can substitute an in-memory fake.

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "dmcp_bearer_token";

/// A single-cell token store.
///
/// The auth state controller is the only writer; the API client reads.
/// Storage faults (quota, disabled storage) are treated as environment
/// faults and ignored.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn get(&self) -> Option<String>;
    /// Overwrite the stored token.
    fn set(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// Token store backed by browser localStorage.
///
/// On the server there is no browser storage; all operations are no-ops
/// and `get` returns `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(not(feature = "ssr"))]
impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(TOKEN_STORAGE_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
            }
        }
    }

    fn clear(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

#[cfg(feature = "ssr")]
impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        None
    }

    fn set(&self, _token: &str) {}

    fn clear(&self) {}
}

/// In-memory token store for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    cell: std::sync::Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, as if a previous session had saved a token.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.cell.lock().expect("token cell poisoned").clone()
    }

    fn set(&self, token: &str) {
        *self.cell.lock().expect("token cell poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.cell.lock().expect("token cell poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = MemoryTokenStore::new();
        store.set("tok-123");
        assert_eq!(store.get(), Some("tok-123".to_string()));
    }

    #[test]
    fn set_overwrites_previous_token() {
        let store = MemoryTokenStore::with_token("old");
        store.set("new");
        assert_eq!(store.get(), Some("new".to_string()));
    }

    #[test]
    fn clear_removes_token() {
        let store = MemoryTokenStore::with_token("tok-123");
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clear_on_empty_store_is_a_noop() {
        let store = MemoryTokenStore::new();
        store.clear();
        assert_eq!(store.get(), None);
    }
}

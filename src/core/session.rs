//! Session state machine
//!
//! Pure transition functions for the auth lifecycle:
//! `Initializing -> {Unauthenticated, Authenticated}`,
//! `Authenticated -> Unauthenticated` (logout or forced expiry),
//! `Unauthenticated -> Authenticated` (successful login).
//!
//! The reactive wrapper in `crate::ui::auth` holds the current phase in a
//! signal and calls into these functions; they own the ordering rule that
//! the token store is written before the new phase is returned.

use super::token_store::TokenStore;

/// Identity assumed when a session is restored from a stored token.
///
/// The token is not validated against the backend at startup; a stale
/// token surfaces lazily as a 401 on the first authenticated request.
pub const RESTORED_USERNAME: &str = "user";

/// An authenticated session: who is logged in, and the credential
/// proving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: String,
}

/// Current phase of the auth lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// Token store not consulted yet.
    #[default]
    Initializing,
    /// No session.
    Unauthenticated,
    /// Live session.
    Authenticated(Session),
}

impl AuthPhase {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthPhase::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Resolve `Initializing` from the token store, without touching the
/// network.
///
/// A non-empty stored token yields `Authenticated` with the placeholder
/// identity; anything else yields `Unauthenticated`.
pub fn restore(store: &dyn TokenStore) -> AuthPhase {
    match store.get().filter(|token| !token.is_empty()) {
        Some(token) => AuthPhase::Authenticated(Session {
            username: RESTORED_USERNAME.to_string(),
            token,
        }),
        None => AuthPhase::Unauthenticated,
    }
}

/// Record a successful login.
///
/// The token store is written before the phase is constructed, so any
/// reader observing `Authenticated` also observes the stored token.
pub fn establish(store: &dyn TokenStore, username: &str, token: &str) -> AuthPhase {
    store.set(token);
    AuthPhase::Authenticated(Session {
        username: username.to_string(),
        token: token.to_string(),
    })
}

/// End the session (user logout or forced expiry). Idempotent.
pub fn terminate(store: &dyn TokenStore) -> AuthPhase {
    store.clear();
    AuthPhase::Unauthenticated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token_store::MemoryTokenStore;

    #[test]
    fn restore_with_stored_token_is_authenticated_without_network() {
        // Restore is a pure store read: no API client is involved, so a
        // stale token is accepted here and only discovered on the first
        // failing request. Deliberate trade-off, kept from the original
        // behavior.
        let store = MemoryTokenStore::with_token("tok-123");
        let phase = restore(&store);
        assert_eq!(
            phase,
            AuthPhase::Authenticated(Session {
                username: RESTORED_USERNAME.to_string(),
                token: "tok-123".to_string(),
            })
        );
    }

    #[test]
    fn restore_with_empty_store_is_unauthenticated() {
        let store = MemoryTokenStore::new();
        assert_eq!(restore(&store), AuthPhase::Unauthenticated);
    }

    #[test]
    fn restore_treats_empty_string_token_as_absent() {
        let store = MemoryTokenStore::with_token("");
        assert_eq!(restore(&store), AuthPhase::Unauthenticated);
    }

    #[test]
    fn establish_writes_store_and_returns_authenticated() {
        let store = MemoryTokenStore::new();
        let phase = establish(&store, "alice", "tok-123");
        // The store write happens before the phase exists.
        assert_eq!(store.get(), Some("tok-123".to_string()));
        assert!(phase.is_authenticated());
        assert_eq!(phase.session().unwrap().username, "alice");
    }

    #[test]
    fn establish_overwrites_previous_token() {
        let store = MemoryTokenStore::with_token("old");
        establish(&store, "alice", "new");
        assert_eq!(store.get(), Some("new".to_string()));
    }

    #[test]
    fn login_then_logout_leaves_store_empty_and_unauthenticated() {
        let store = MemoryTokenStore::new();
        let phase = establish(&store, "alice", "tok-123");
        assert!(phase.is_authenticated());

        let phase = terminate(&store);
        assert_eq!(phase, AuthPhase::Unauthenticated);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn terminate_is_idempotent() {
        let store = MemoryTokenStore::new();
        assert_eq!(terminate(&store), AuthPhase::Unauthenticated);
        assert_eq!(terminate(&store), AuthPhase::Unauthenticated);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn forced_expiry_logs_out_and_clears_store() {
        use crate::core::expiry::{ExpiryMonitor, Tick};

        let store = MemoryTokenStore::new();
        let mut phase = establish(&store, "alice", "tok-123");

        // Backend rejects the token; the monitor counts 3, 2, 1 and then
        // demands the logout.
        let mut monitor = ExpiryMonitor::new();
        assert!(monitor.trigger(phase.is_authenticated()));
        assert_eq!(monitor.tick(), Tick::Counting(2));
        assert_eq!(monitor.tick(), Tick::Counting(1));
        assert_eq!(monitor.tick(), Tick::LogOut);

        phase = terminate(&store);
        assert_eq!(phase, AuthPhase::Unauthenticated);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn failed_login_leaves_state_and_store_unchanged() {
        // A failed credential exchange never reaches `establish`; the
        // caller keeps the previous phase and the store is untouched.
        let store = MemoryTokenStore::new();
        let phase = restore(&store);
        assert_eq!(phase, AuthPhase::Unauthenticated);
        assert_eq!(store.get(), None);
    }
}

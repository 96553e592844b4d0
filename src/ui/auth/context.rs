//! Auth context for managing the user session
//!
//! Holds the current [`AuthPhase`] in a signal, restores it from the
//! token store on mount, and exposes login/logout. All transitions go
//! through `core::session`, which owns the store-write-before-transition
//! ordering. The stored token is not validated against the backend at
//! startup; a stale token surfaces as a 401 on the first authenticated
//! request and is handled by the session expiry monitor.

use leptos::prelude::*;

use crate::core::api::{ApiClient, ApiError};
use crate::core::session::{self, AuthPhase};
use crate::core::token_store::BrowserTokenStore;

/// Auth context providing session state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current phase of the auth lifecycle
    pub state: RwSignal<AuthPhase>,
    /// Login request in flight
    pub loading: RwSignal<bool>,
    /// Error message from the last login attempt
    pub error: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Whether a session is live. Derived from the phase, never stored.
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    /// Non-reactive variant for event handlers and timers.
    pub fn is_authenticated_untracked(&self) -> bool {
        self.state.get_untracked().is_authenticated()
    }

    /// Username of the current session, if any
    pub fn username(&self) -> Option<String> {
        self.state
            .get()
            .session()
            .map(|session| session.username.clone())
    }

    /// Clear the last login error
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token is persisted and the phase flips to
    /// `Authenticated`; on failure the phase is left unchanged and the
    /// error is surfaced to the form. Never retried automatically.
    pub async fn login(
        self,
        client: &ApiClient,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.loading.set(true);
        self.error.set(None);

        let outcome = match client.login(username, password).await {
            Ok(response) => {
                self.state
                    .set(session::establish(&BrowserTokenStore, username, &response.token));
                Ok(())
            }
            Err(err) => {
                self.error.set(Some(err.to_string()));
                Err(err)
            }
        };

        self.loading.set(false);
        outcome
    }

    /// Clear the stored token and end the session. Idempotent.
    pub fn logout(&self) {
        self.state.set(session::terminate(&BrowserTokenStore));
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Both server and client render `Initializing` first, so hydration
    // sees identical markup; the client resolves it right after.
    let state = RwSignal::new(AuthPhase::Initializing);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let ctx = AuthContext {
        state,
        loading,
        error,
    };

    // Restore from localStorage after hydration. This is a synchronous
    // store read, no network call and no suspension.
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if matches!(state.get_untracked(), AuthPhase::Initializing) {
                state.set(session::restore(&BrowserTokenStore));
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

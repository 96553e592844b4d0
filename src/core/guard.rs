//! Routing decisions for protected and public views
//!
//! Each navigable view is either `Protected` (console pages) or `Public`
//! (login). The decision is a pure function of the route class and the
//! current auth phase; the components in `crate::ui::guard` render or
//! navigate accordingly.

use super::session::AuthPhase;

/// Static classification of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a session; unauthenticated visitors go to the login view.
    Protected,
    /// Only meaningful without a session; authenticated visitors go to
    /// the console home.
    Public,
}

/// What the routing layer must do for a given view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Auth phase not resolved yet: show a placeholder, make no redirect
    /// decision.
    Wait,
    /// Render the view's content.
    Render,
    /// Navigate to the login view, replacing history.
    RedirectToLogin,
    /// Navigate to the authenticated landing view, replacing history.
    RedirectToHome,
}

/// Decide what to do for a route of the given class in the given phase.
pub fn evaluate(class: RouteClass, phase: &AuthPhase) -> GuardOutcome {
    match (class, phase) {
        // Never redirect while the stored token has not been consulted;
        // a flash-redirect away from a page the user is entitled to see
        // is worse than a moment of spinner.
        (_, AuthPhase::Initializing) => GuardOutcome::Wait,
        (RouteClass::Protected, AuthPhase::Authenticated(_)) => GuardOutcome::Render,
        (RouteClass::Protected, AuthPhase::Unauthenticated) => GuardOutcome::RedirectToLogin,
        (RouteClass::Public, AuthPhase::Authenticated(_)) => GuardOutcome::RedirectToHome,
        (RouteClass::Public, AuthPhase::Unauthenticated) => GuardOutcome::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Session;

    fn authenticated() -> AuthPhase {
        AuthPhase::Authenticated(Session {
            username: "alice".to_string(),
            token: "tok-123".to_string(),
        })
    }

    #[test]
    fn initializing_never_redirects() {
        assert_eq!(
            evaluate(RouteClass::Protected, &AuthPhase::Initializing),
            GuardOutcome::Wait
        );
        assert_eq!(
            evaluate(RouteClass::Public, &AuthPhase::Initializing),
            GuardOutcome::Wait
        );
    }

    #[test]
    fn protected_renders_for_authenticated() {
        assert_eq!(
            evaluate(RouteClass::Protected, &authenticated()),
            GuardOutcome::Render
        );
    }

    #[test]
    fn protected_redirects_unauthenticated_to_login() {
        assert_eq!(
            evaluate(RouteClass::Protected, &AuthPhase::Unauthenticated),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn public_redirects_authenticated_to_home() {
        assert_eq!(
            evaluate(RouteClass::Public, &authenticated()),
            GuardOutcome::RedirectToHome
        );
    }

    #[test]
    fn public_renders_for_unauthenticated() {
        assert_eq!(
            evaluate(RouteClass::Public, &AuthPhase::Unauthenticated),
            GuardOutcome::Render
        );
    }
}

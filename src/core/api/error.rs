//! Error taxonomy for backend calls
//!
//! Every failure of an API call maps to exactly one of these variants.
//! None of them is retried automatically; recovery is always a fresh
//! user-initiated action.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure (offline, DNS, aborted). Surfaced to forms as a
    /// generic retry-suggesting message.
    #[error("Network error. Please check your connection and try again.")]
    Network,

    /// Non-2xx response that is not an authentication failure.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The backend rejected the current token (401 on an authenticated
    /// request). Routed through the session expiry countdown, never shown
    /// as a raw form error.
    #[error("Your session has expired. Please log in again.")]
    Authentication,

    /// Business-rule failure reported by the backend; shown verbatim.
    #[error("{0}")]
    Application(String),
}

impl ApiError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_error_displays_backend_message_verbatim() {
        let err = ApiError::Application("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn http_error_displays_its_message() {
        let err = ApiError::Http {
            status: 500,
            message: "Request failed with status 500".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 500");
        assert!(!err.is_authentication());
    }

    #[test]
    fn authentication_error_is_flagged() {
        assert!(ApiError::Authentication.is_authentication());
    }
}

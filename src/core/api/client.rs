//! Authenticated HTTP client for the DMCP backend

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::envelope::Envelope;
use super::error::ApiError;
use super::types::*;
use super::url::{enforce_https, join_url};
use crate::core::token_store::TokenStore;

/// Hook invoked when an authenticated request is rejected with 401.
///
/// Injected at construction so the client stays ignorant of who listens;
/// the session expiry monitor subscribes through it.
pub type AuthFailureHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client for the DMCP backend.
///
/// Attaches the stored bearer token to every request, upgrades plain-http
/// URLs outside local development, and converts every failure into one
/// [`ApiError`] variant. A 401 on an authenticated request additionally
/// fires the auth-failure hook, exactly once per response, before the
/// error is returned; the client does not wait for listeners.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    on_auth_failure: AuthFailureHook,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
        on_auth_failure: AuthFailureHook,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            tokens,
            on_auth_failure,
        }
    }

    /// Absolute request URL for an endpoint path.
    fn resolve(&self, endpoint: &str) -> String {
        let url = join_url(&self.base_url, endpoint);
        enforce_https(&url, page_hostname().as_deref())
    }

    /// Issue a request, attach the bearer token when present, and map
    /// authentication failures.
    async fn send(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = self.resolve(endpoint);
        let mut builder = match method {
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            "DELETE" => Request::delete(&url),
            _ => Request::get(&url),
        };

        let token = self.tokens.get().filter(|t| !t.is_empty());
        let authenticated = token.is_some();
        if let Some(token) = &token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder.json(&body).map_err(|_| ApiError::Network)?,
            None => builder.build().map_err(|_| ApiError::Network)?,
        };

        let response = request.send().await.map_err(|_| ApiError::Network)?;

        if response.status() == 401 && authenticated {
            // Broadcast-then-return: listeners react on their own
            // schedule, the failing call does not wait for them.
            (self.on_auth_failure)();
            return Err(ApiError::Authentication);
        }

        Ok(response)
    }

    /// Map a non-2xx response to an error, pulling the backend's message
    /// out of the envelope body when there is one.
    async fn failure(response: gloo_net::http::Response) -> ApiError {
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| extract_error_message(&body));

        match message {
            // A 401 on an unauthenticated call is a rejected credential
            // exchange, a business failure rather than an expired session.
            Some(msg) if status == 401 => ApiError::Application(msg),
            Some(msg) => ApiError::Http {
                status,
                message: msg,
            },
            None => ApiError::Http {
                status,
                message: format!("Request failed with status {status}"),
            },
        }
    }

    /// Request an endpoint answering the standard envelope.
    async fn fetch<T: DeserializeOwned>(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, endpoint, body).await?;
        if !response.ok() {
            return Err(Self::failure(response).await);
        }
        let envelope: Envelope<T> = response.json().await.map_err(|_| ApiError::Network)?;
        envelope.into_result()
    }

    /// Like [`ApiClient::fetch`], ignoring the success payload.
    async fn fetch_ack(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        let response = self.send(method, endpoint, body).await?;
        if !response.ok() {
            return Err(Self::failure(response).await);
        }
        let envelope: Envelope<serde_json::Value> =
            response.json().await.map_err(|_| ApiError::Network)?;
        envelope.into_ack()
    }

    /// Request an endpoint answering a bare JSON body (login, health).
    async fn fetch_plain<T: DeserializeOwned>(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, endpoint, body).await?;
        if !response.ok() {
            return Err(Self::failure(response).await);
        }
        response.json().await.map_err(|_| ApiError::Network)
    }

    // --- auth ---

    /// Exchange credentials for a bearer token. Goes out unauthenticated.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|_| ApiError::Network)?;
        self.fetch_plain("POST", "auth/login", Some(body)).await
    }

    // --- health ---

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.fetch_plain("GET", "health", None).await
    }

    // --- data sources ---

    pub async fn list_datasources(&self) -> Result<Vec<DataSource>, ApiError> {
        self.fetch("GET", "datasources/", None).await
    }

    pub async fn get_datasource(&self, id: i64) -> Result<DataSource, ApiError> {
        self.fetch("GET", &format!("datasources/{id}"), None).await
    }

    pub async fn create_datasource(
        &self,
        payload: &DataSourcePayload,
    ) -> Result<DataSource, ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Network)?;
        self.fetch("POST", "datasources/", Some(body)).await
    }

    pub async fn update_datasource(
        &self,
        id: i64,
        payload: &DataSourcePayload,
    ) -> Result<DataSource, ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Network)?;
        self.fetch("PUT", &format!("datasources/{id}"), Some(body))
            .await
    }

    pub async fn delete_datasource(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_ack("DELETE", &format!("datasources/{id}"), None)
            .await
    }

    /// Ask the backend to open and close a connection with the stored
    /// credentials.
    pub async fn test_datasource(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_ack("POST", &format!("datasources/{id}/test"), None)
            .await
    }

    // --- tools ---

    pub async fn list_tools(&self) -> Result<Vec<Tool>, ApiError> {
        self.fetch("GET", "tools", None).await
    }

    pub async fn get_tool(&self, id: i64) -> Result<Tool, ApiError> {
        self.fetch("GET", &format!("tools/{id}"), None).await
    }

    pub async fn create_tool(&self, payload: &ToolPayload) -> Result<Tool, ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Network)?;
        self.fetch("POST", "tools", Some(body)).await
    }

    pub async fn update_tool(&self, id: i64, payload: &ToolPayload) -> Result<Tool, ApiError> {
        let body = serde_json::to_value(payload).map_err(|_| ApiError::Network)?;
        self.fetch("PUT", &format!("tools/{id}"), Some(body)).await
    }

    pub async fn delete_tool(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_ack("DELETE", &format!("tools/{id}"), None).await
    }

    // --- users ---

    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.fetch("GET", "users/me", None).await
    }

    pub async fn generate_token(&self) -> Result<IssuedToken, ApiError> {
        self.fetch("GET", "users/generate-token", None).await
    }

    pub async fn change_password(
        &self,
        user_id: i64,
        change: &PasswordChange,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(change).map_err(|_| ApiError::Network)?;
        self.fetch_ack("POST", &format!("users/{user_id}/change-password"), Some(body))
            .await
    }
}

/// Hostname of the page we are running on, when there is a window.
#[cfg(not(feature = "ssr"))]
fn page_hostname() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

#[cfg(feature = "ssr")]
fn page_hostname() -> Option<String> {
    None
}

/// Pull the first human-readable message out of an error body.
///
/// Handles the standard envelope (`errors[].msg`), the same envelope
/// nested under FastAPI's `detail`, and a bare `detail` string.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    let first_msg = |v: &serde_json::Value| -> Option<String> {
        v.get("errors")?
            .as_array()?
            .first()?
            .get("msg")?
            .as_str()
            .map(str::to_string)
    };

    if let Some(msg) = first_msg(&value) {
        return Some(msg);
    }
    if let Some(detail) = value.get("detail") {
        if let Some(msg) = first_msg(detail) {
            return Some(msg);
        }
        if let Some(msg) = detail.as_str() {
            return Some(msg.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_envelope_error_message() {
        let body = r#"{"success": false, "data": null, "errors": [{"msg": "Invalid credentials"}], "warnings": []}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn extracts_envelope_nested_under_detail() {
        let body = r#"{"detail": {"success": false, "errors": [{"msg": "Token generation failed"}]}}"#;
        assert_eq!(
            extract_error_message(body),
            Some("Token generation failed".to_string())
        );
    }

    #[test]
    fn extracts_bare_detail_string() {
        let body = r#"{"detail": "Not Found"}"#;
        assert_eq!(extract_error_message(body), Some("Not Found".to_string()));
    }

    #[test]
    fn unparseable_body_yields_none() {
        assert_eq!(extract_error_message("<html>bad gateway</html>"), None);
        assert_eq!(extract_error_message(r#"{"success": false}"#), None);
    }
}

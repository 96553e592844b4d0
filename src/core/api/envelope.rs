//! Standard response envelope of the DMCP backend
//!
//! Every enveloped endpoint answers
//! `{ success, data?, errors: [{msg}], warnings: [{msg}] }`.

use serde::Deserialize;

use super::error::ApiError;

/// One error or warning entry inside the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    pub msg: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    #[serde(default)]
    pub warnings: Vec<ApiMessage>,
}

impl<T> Envelope<T> {
    /// First reported error message, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(|e| e.msg.as_str())
    }

    /// Extract the payload, turning `success: false` into an
    /// [`ApiError::Application`] carrying the first reported message.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Application(
                self.first_error().unwrap_or("Request failed").to_string(),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Application("Response contained no data".to_string()))
    }

    /// Like [`Envelope::into_result`], for endpoints whose success
    /// payload is irrelevant (deletes, password changes).
    pub fn into_ack(self) -> Result<(), ApiError> {
        if !self.success {
            return Err(ApiError::Application(
                self.first_error().unwrap_or("Request failed").to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_yields_data() {
        let envelope: Envelope<Vec<String>> = serde_json::from_value(serde_json::json!({
            "success": true,
            "data": ["a", "b"],
            "errors": [],
            "warnings": []
        }))
        .unwrap();

        assert_eq!(envelope.into_result().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn failure_envelope_surfaces_first_message() {
        let envelope: Envelope<Vec<String>> = serde_json::from_value(serde_json::json!({
            "success": false,
            "data": null,
            "errors": [{"msg": "Invalid credentials"}, {"msg": "second"}],
            "warnings": []
        }))
        .unwrap();

        assert_eq!(
            envelope.into_result().unwrap_err(),
            ApiError::Application("Invalid credentials".to_string())
        );
    }

    #[test]
    fn failure_envelope_without_messages_gets_generic_error() {
        let envelope: Envelope<()> = serde_json::from_value(serde_json::json!({
            "success": false
        }))
        .unwrap();

        assert_eq!(
            envelope.into_ack().unwrap_err(),
            ApiError::Application("Request failed".to_string())
        );
    }

    #[test]
    fn missing_optional_fields_default() {
        // The backend omits errors/warnings on some success paths.
        let envelope: Envelope<i64> = serde_json::from_value(serde_json::json!({
            "success": true,
            "data": 7
        }))
        .unwrap();

        assert!(envelope.warnings.is_empty());
        assert_eq!(envelope.into_result().unwrap(), 7);
    }

    #[test]
    fn success_without_data_is_an_error_for_into_result() {
        let envelope: Envelope<i64> = serde_json::from_value(serde_json::json!({
            "success": true
        }))
        .unwrap();

        assert!(envelope.into_result().is_err());
    }

    #[test]
    fn ack_ignores_missing_data() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(serde_json::json!({
            "success": true
        }))
        .unwrap();

        assert!(envelope.into_ack().is_ok());
    }
}

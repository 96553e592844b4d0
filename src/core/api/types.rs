//! Wire types for the DMCP backend
//!
//! Field names mirror the backend's JSON; timestamps stay as the ISO
//! strings the backend sends, formatting is a display concern.

use serde::{Deserialize, Serialize};

/// Credential exchange request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Credential exchange response (not enveloped).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in_minutes: i64,
}

/// `GET /health` response (not enveloped).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// A stored data source connection record. The password is write-only
/// and never returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataSource {
    pub id: i64,
    pub name: String,
    pub database_type: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    pub database: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub connection_string: Option<String>,
    #[serde(default)]
    pub ssl_mode: Option<String>,
    #[serde(default)]
    pub additional_params: serde_json::Map<String, serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update body for a data source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DataSourcePayload {
    pub name: String,
    pub database_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_mode: Option<String>,
}

/// One declared parameter of a tool's SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

/// A stored tool definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tool {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub tool_type: String,
    pub sql: String,
    pub datasource_id: i64,
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub updated_at: String,
}

/// Create/update body for a tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub tool_type: String,
    pub sql: String,
    pub datasource_id: i64,
    pub parameters: Vec<ParameterDefinition>,
}

/// Current user record from `/users/me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Password change request body.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Freshly issued API token from `/users/generate-token`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: String,
    pub user_id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_parses_with_type_field_renamed() {
        let tool: Tool = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "orders-by-region",
            "description": null,
            "type": "query",
            "sql": "SELECT * FROM orders WHERE region = :region",
            "datasource_id": 2,
            "parameters": [
                {"name": "region", "type": "string", "required": true}
            ],
            "tags": ["sales"],
            "updated_at": "2025-06-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(tool.tool_type, "query");
        assert_eq!(tool.parameters[0].param_type, "string");
        assert!(tool.parameters[0].default.is_none());
    }

    #[test]
    fn data_source_parses_without_optional_fields() {
        let ds: DataSource = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "warehouse",
            "database_type": "sqlite",
            "database": "warehouse.db",
            "additional_params": {},
            "created_at": "2025-05-01T09:00:00Z",
            "updated_at": "2025-05-02T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(ds.host, None);
        assert_eq!(ds.port, None);
    }

    #[test]
    fn data_source_payload_omits_absent_fields() {
        let payload = DataSourcePayload {
            name: "warehouse".to_string(),
            database_type: "sqlite".to_string(),
            database: "warehouse.db".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("host").is_none());
        assert_eq!(json["database"], "warehouse.db");
    }
}

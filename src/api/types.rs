//! Request and response types for the Revue API
//!
//! The API has no single response schema; endpoints are inspected at the
//! call site via [`ApiResponse`]. The types here cover the shapes that are
//! stable enough to deserialize directly.
//!
//! [`ApiResponse`]: crate::api::ApiResponse

use serde::{Deserialize, Serialize};

/// Request body for the authentication endpoint
#[derive(Debug, Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response body of the authentication endpoint
///
/// The token defaults to an empty string when the field is absent; dependent
/// requests are then rejected by the API rather than by us.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default, rename = "accessToken")]
    pub access_token: String,
}

/// Body sent to the create and edit endpoints
///
/// No client-side validation; field validation is the API's responsibility.
#[derive(Debug, Clone, Serialize)]
pub struct RevuePayload {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl RevuePayload {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// One entry of the list endpoint's array
#[derive(Debug, Clone, Deserialize)]
pub struct Revue {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_response_with_token() {
        let response: AuthResponse =
            serde_json::from_value(json!({ "accessToken": "jwt-abc" })).unwrap();
        assert_eq!(response.access_token, "jwt-abc");
    }

    #[test]
    fn test_auth_response_missing_token_defaults_to_empty() {
        let response: AuthResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.access_token.is_empty());
    }

    #[test]
    fn test_revue_payload_serialization() {
        let payload = RevuePayload::new("New Revue", "", "Full Revue");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "New Revue",
                "url": "",
                "description": "Full Revue"
            })
        );
    }

    #[test]
    fn test_revue_deserialization_tolerates_missing_fields() {
        let revue: Revue = serde_json::from_value(json!({ "id": "abc123" })).unwrap();
        assert_eq!(revue.id, "abc123");
        assert!(revue.title.is_empty());
    }
}

//! Revue API client
//!
//! Provides an HTTP client for the RevueCrafters REST API. The client is
//! created once per scenario run by [`RevueClient::login`] and attaches the
//! bearer token obtained there to every subsequent request.
//!
//! Unlike a general-purpose client, non-2xx statuses are not errors here:
//! the negative checks assert on 400 responses and their bodies, so every
//! HTTP response is surfaced as an [`ApiResponse`]. Only transport failures
//! and undecodable bodies become [`ApiError`]s.

use crate::api::types::{AuthRequest, AuthResponse, Revue, RevuePayload};
use crate::api::{AUTH_PATH, CREATE_PATH, DELETE_PATH, EDIT_PATH, LIST_PATH};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// An HTTP response, decoded far enough to assert on
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// The `msg` field of the body, if present
    pub fn msg(&self) -> Option<&str> {
        self.body.get("msg").and_then(Value::as_str)
    }
}

/// Revue API client bound to a base URL and a bearer token
pub struct RevueClient {
    http: Client,
    base_url: String,
    token: String,
}

impl RevueClient {
    /// Authenticate and build a client
    ///
    /// Performs one unauthenticated POST to the authentication endpoint and
    /// extracts `accessToken` from the response, defaulting to an empty
    /// string when the field is absent. An unreachable endpoint or a
    /// malformed body is fatal: no checks can run without a session.
    #[instrument(skip(api, password), fields(base_url = %api.base_url()))]
    pub async fn login(api: &ApiConfig, email: &str, password: &str) -> ApiResult<Self> {
        let http = build_http(api)?;
        let url = format!("{}{}", api.base_url(), AUTH_PATH);

        let response = http
            .post(&url)
            .json(&AuthRequest { email, password })
            .send()
            .await?;

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("authentication response: {}", e)))?;

        if auth.access_token.is_empty() {
            debug!("authentication response carried no accessToken");
        }

        Ok(Self {
            http,
            base_url: api.base_url().to_string(),
            token: auth.access_token,
        })
    }

    /// Build a client from an already-known token, skipping the login call
    pub fn with_token(api: &ApiConfig, token: impl Into<String>) -> ApiResult<Self> {
        Ok(Self {
            http: build_http(api)?,
            base_url: api.base_url().to_string(),
            token: token.into(),
        })
    }

    /// The bearer token held by this session
    pub fn token(&self) -> &str {
        &self.token
    }

    /// POST the create endpoint with a revue payload
    #[instrument(skip(self, payload))]
    pub async fn create_revue(&self, payload: &RevuePayload) -> ApiResult<ApiResponse> {
        let request = self.http.post(self.url(CREATE_PATH)).json(payload);
        self.execute(request).await
    }

    /// POST the create endpoint with an arbitrary JSON body
    ///
    /// Used by the missing-required-fields check, which sends `{}`.
    pub async fn create_revue_raw(&self, body: &Value) -> ApiResult<ApiResponse> {
        let request = self.http.post(self.url(CREATE_PATH)).json(body);
        self.execute(request).await
    }

    /// GET the list endpoint
    #[instrument(skip(self))]
    pub async fn list_revues(&self) -> ApiResult<ApiResponse> {
        let request = self.http.get(self.url(LIST_PATH));
        self.execute(request).await
    }

    /// GET the list endpoint and deserialize the array
    pub async fn fetch_revues(&self) -> ApiResult<Vec<Revue>> {
        let response = self.list_revues().await?;
        serde_json::from_value(response.body)
            .map_err(|e| ApiError::InvalidResponse(format!("revue list: {}", e)))
    }

    /// PUT the edit endpoint for the given revue id
    #[instrument(skip(self, payload), fields(revue_id = %revue_id))]
    pub async fn edit_revue(
        &self,
        revue_id: &str,
        payload: &RevuePayload,
    ) -> ApiResult<ApiResponse> {
        let request = self
            .http
            .put(self.url(EDIT_PATH))
            .query(&[("revueId", revue_id)])
            .json(payload);
        self.execute(request).await
    }

    /// DELETE the delete endpoint for the given revue id
    #[instrument(skip(self), fields(revue_id = %revue_id))]
    pub async fn delete_revue(&self, revue_id: &str) -> ApiResult<ApiResponse> {
        let request = self
            .http
            .delete(self.url(DELETE_PATH))
            .query(&[("revueId", revue_id)]);
        self.execute(request).await
    }

    /// Build a URL for an API endpoint
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send an authenticated request and decode the body
    async fn execute(&self, request: RequestBuilder) -> ApiResult<ApiResponse> {
        let response = request.bearer_auth(&self.token).send().await?;
        decode(response).await
    }
}

/// Decode any HTTP response into an [`ApiResponse`]
///
/// Empty bodies decode to `Value::Null`; anything else must be JSON.
async fn decode(response: Response) -> ApiResult<ApiResponse> {
    let status = response.status();
    let text = response.text().await?;

    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("HTTP {}: {}", status, e)))?
    };

    debug!(status = %status, "decoded API response");
    Ok(ApiResponse { status, body })
}

/// Build the underlying reqwest client from configuration
fn build_http(api: &ApiConfig) -> ApiResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(api.timeout_secs))
        .danger_accept_invalid_certs(!api.verify_ssl)
        .user_agent(format!("revue-e2e/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ApiError::Request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn test_with_token_holds_token() {
        let api = ApiConfig::default();
        let client = RevueClient::with_token(&api, "jwt-abc").unwrap();
        assert_eq!(client.token(), "jwt-abc");
        assert_eq!(
            client.url(LIST_PATH),
            "https://d2925tksfvgq8c.cloudfront.net/api/Revue/All"
        );
    }

    #[test]
    fn test_api_response_msg() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: serde_json::json!({ "msg": "Successfully created!" }),
        };
        assert_eq!(response.msg(), Some("Successfully created!"));

        let response = ApiResponse {
            status: StatusCode::BAD_REQUEST,
            body: Value::Null,
        };
        assert_eq!(response.msg(), None);
    }
}

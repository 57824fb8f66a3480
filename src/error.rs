//! Error types for revue-e2e
//!
//! This module defines the error hierarchy used throughout the suite.
//! We use `thiserror` for library-style errors; the binary converts them
//! to a process exit status at the boundary.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Revue API error: {0}")]
    Api(#[from] ApiError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Revue API transport and decoding errors
///
/// These cover failures to reach the API or to make sense of what it sent
/// back. Unexpected-but-well-formed responses (wrong status, wrong message)
/// are not `ApiError`s; checks report those as [`StepError`]s.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response from the Revue API: {0}")]
    InvalidResponse(String),
}

/// A single check's failure
#[derive(Error, Debug)]
pub enum StepError {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Expected HTTP {expected}, got HTTP {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },

    #[error("Expected msg {expected:?}, got {actual:?}")]
    UnexpectedMessage { expected: String, actual: String },

    #[error("Response body is missing field '{0}'")]
    MissingField(&'static str),

    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),

    #[error("No revue id captured; the create check must run first")]
    MissingRevueId,
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for Revue API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Result type alias for a single check
pub type StepResult = std::result::Result<(), StepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_display() {
        let err = StepError::UnexpectedStatus {
            expected: 200,
            actual: 400,
        };
        assert_eq!(err.to_string(), "Expected HTTP 200, got HTTP 400");

        let err = StepError::UnexpectedMessage {
            expected: "Edited successfully".into(),
            actual: "nope".into(),
        };
        assert!(err.to_string().contains("Edited successfully"));

        let err = StepError::MissingField("id");
        assert!(err.to_string().contains("'id'"));
    }

    #[test]
    fn test_api_error_wraps_into_step_error() {
        let err: StepError = ApiError::InvalidResponse("not json".into()).into();
        assert!(matches!(err, StepError::Api(_)));
    }
}

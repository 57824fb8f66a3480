//! Configuration types for revue-e2e
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Revue API connection settings
    pub api: ApiConfig,

    /// Login credentials for the authentication bootstrap
    pub credentials: CredentialsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Revue API connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the RevueCrafters deployment
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Whether to verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://d2925tksfvgq8c.cloudfront.net".to_string(),
            timeout_secs: 30,
            verify_ssl: true,
        }
    }
}

impl ApiConfig {
    /// Get the base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Build a full URL for an API endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

/// Login credentials
///
/// Prefer the REVUE_EMAIL / REVUE_PASSWORD environment variables over
/// committing credentials to a config file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CredentialsConfig {
    pub email: Option<String>,

    pub password: Option<String>,
}

impl CredentialsConfig {
    /// Get the email, or a missing-field error
    pub fn email(&self) -> Result<&str, crate::error::ConfigError> {
        self.email
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| crate::error::ConfigError::Missing {
                field: "credentials.email (set REVUE_EMAIL environment variable)".to_string(),
            })
    }

    /// Get the password, or a missing-field error
    pub fn password(&self) -> Result<&str, crate::error::ConfigError> {
        self.password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| crate::error::ConfigError::Missing {
                field: "credentials.password (set REVUE_PASSWORD environment variable)".to_string(),
            })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}

//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (REVUE_E2E_*, plus REVUE_BASE_URL / REVUE_EMAIL /
//!    REVUE_PASSWORD convenience variables)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "revue-e2e.toml",
    ".revue-e2e.toml",
    "~/.config/revue-e2e/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
///
/// Credentials are not validated here; the binary merges CLI overrides first
/// and resolves them through the [`CredentialsConfig`] accessors.
///
/// [`CredentialsConfig`]: crate::config::CredentialsConfig
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Defaults are handled by serde defaults on AppConfig

    // 2. Add configuration file
    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // 3. Add environment variables with REVUE_E2E_ prefix
    // e.g., REVUE_E2E_API__BASE_URL, REVUE_E2E_API__TIMEOUT_SECS
    // Double underscore (__) maps to nested keys (api.base_url)
    builder = builder.add_source(
        Environment::with_prefix("REVUE_E2E")
            .separator("__")
            .try_parsing(true),
    );

    // 4. Handle the common short-form environment variables
    for (env_var, key) in &[
        ("REVUE_BASE_URL", "api.base_url"),
        ("REVUE_EMAIL", "credentials.email"),
        ("REVUE_PASSWORD", "credentials.password"),
    ] {
        if let Ok(value) = std::env::var(env_var)
            && !value.is_empty()
        {
            builder = builder
                .set_override(*key, value)
                .map_err(|e| ConfigError::Load(e.to_string()))?;
        }
    }

    // Build and deserialize
    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.api.base_url.is_empty() {
        return Err(ConfigError::Missing {
            field: "api.base_url".to_string(),
        });
    }

    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        return Err(ConfigError::Invalid {
            message: format!(
                "api.base_url must start with http:// or https://, got: {}",
                config.api.base_url
            ),
        });
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            message: "api.timeout_secs must be greater than 0".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_str_basic() {
        let toml = r#"
[api]
base_url = "https://revues.example.com"
timeout_secs = 10

[credentials]
email = "tester@example.com"
password = "hunter2"
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "https://revues.example.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.credentials.email.as_deref(), Some("tester@example.com"));
        assert_eq!(config.credentials.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_load_config_from_str_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.api.base_url, "https://d2925tksfvgq8c.cloudfront.net");
        assert!(config.credentials.email.is_none());
    }

    #[test]
    fn test_invalid_url_error() {
        let toml = r#"
[api]
base_url = "not-a-url"
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_empty_url_error() {
        let toml = r#"
[api]
base_url = ""
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_zero_timeout_error() {
        let toml = r#"
[api]
base_url = "https://revues.example.com"
timeout_secs = 0
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_logging_section() {
        let toml = r#"
[logging]
level = "debug"
format = "json"
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, crate::config::LogFormat::Json);
    }
}

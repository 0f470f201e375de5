//! Application configuration module
//!
//! Provides configuration types for the snippet client.

use thiserror::Error;

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the CRUD service, without a trailing slash
    pub server_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.server_url)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let server_url = self
            .server_url
            .ok_or(ConfigError::MissingValue("server_url"))?;
        let server_url = server_url.trim().trim_end_matches('/').to_string();
        validate_url(&server_url)?;
        Ok(AppConfig { server_url })
    }
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidUrl(url.to_string()))?;
    if rest.is_empty() {
        return Err(ConfigError::InvalidUrl(url.to_string()));
    }
    Ok(())
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = AppConfig::builder()
            .server_url("http://localhost:3000/")
            .build()
            .unwrap();
        assert_eq!(config.server_url, "http://localhost:3000");
    }

    #[test]
    fn test_builder_requires_url() {
        assert_eq!(
            AppConfig::builder().build().unwrap_err(),
            ConfigError::MissingValue("server_url")
        );
    }

    #[test]
    fn test_invalid_scheme() {
        let err = AppConfig::builder()
            .server_url("ftp://example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
        assert!(AppConfig::builder().server_url("https://").build().is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}

//! Client configuration
//!
//! Wraps the shared [`AppConfig`] and resolves endpoint URLs for the
//! snippet API client.

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "CLIENT_API_URL";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let app = match std::env::var(SERVER_URL_ENV) {
            Ok(url) => AppConfig::builder().server_url(url).build().unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {}", SERVER_URL_ENV, e);
                AppConfig::default()
            }),
            Err(_) => AppConfig::default(),
        };
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    ///
    /// Honors `CLIENT_API_URL` when it holds a valid http(s) URL.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Configuration pointing at an explicit server
    pub fn with_server_url(url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(url))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }
}

/**
 * Server Configuration
 *
 * This module handles loading of server configuration and opening the
 * SQLite snippet store.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary first), with defaults suitable for local development:
 *
 * - `DATABASE_URL` - sqlx SQLite URL, default `sqlite://snipvault.db?mode=rwc`
 * - `SERVER_PORT` or `PORT` - listen port, default `3000`
 * - `DB_MAX_CONNECTIONS` - pool size, default `5`
 *
 * # Error Handling
 *
 * A store that fails to open is logged and replaced by `None`; the server
 * still starts and answers store-backed requests with an error.
 */

use sqlx::SqlitePool;

use crate::backend::snippets::db;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://snipvault.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    ///
    /// Unparsable numbers fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|raw| match raw.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!("Ignoring invalid port {:?}, using {}", raw, DEFAULT_PORT);
                    None
                }
            })
            .unwrap_or(defaults.port);

        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_connections);

        Self {
            database_url,
            port,
            max_connections,
        }
    }

    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Database configuration result
///
/// Contains the database connection pool if successfully opened,
/// or `None` if the store is not available.
pub type DatabaseConfig = Option<SqlitePool>;

/// Open the snippet store
///
/// # Returns
///
/// - `Some(SqlitePool)` if the database opened and its schema is in place
/// - `None` if opening failed; the error is logged
pub async fn load_database(config: &ServerConfig) -> DatabaseConfig {
    tracing::info!("Connecting to database {}...", config.database_url);

    match db::connect(&config.database_url, config.max_connections).await {
        Ok(pool) => {
            tracing::info!("Database connection pool created successfully");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("Failed to open snippet database: {:?}", e);
            tracing::warn!("Snippet routes will answer with errors until restart");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().port(), 3000);
    }

    #[test]
    fn test_server_port_wins_over_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SERVER_PORT", "8080"),
            ("PORT", "9090"),
        ]));
        assert_eq!(config.port, 8080);

        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "9090")]));
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("DB_MAX_CONNECTIONS", "0"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[tokio::test]
    async fn test_load_database_failure_yields_none() {
        let config = ServerConfig {
            database_url: "sqlite:///nonexistent-dir/for/sure/snippets.db".to_string(),
            ..ServerConfig::default()
        };
        assert!(load_database(&config).await.is_none());
    }

    #[tokio::test]
    async fn test_load_memory_database() {
        let config = ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            ..ServerConfig::default()
        };
        assert!(load_database(&config).await.is_some());
    }
}

//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the client and the backend. Everything here is serializable and free of
//! transport concerns, so both sides agree on the shape of a snippet.

/// Snippet model and its create/patch inputs
pub mod snippet;

/// Wire documents exchanged with the CRUD service
pub mod document;

/// Session-scoped categories
pub mod category;

/// Derived tags
pub mod tag;

/// Search filters
pub mod filters;

/// Dashboard statistics
pub mod stats;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use snippet::{NewSnippet, Snippet, SnippetPatch};
pub use document::{DeleteResponse, ErrorBody, HealthResponse, SnippetDocument};
pub use category::{Category, CategoryPatch, NewCategory};
pub use tag::{NewTag, Tag};
pub use filters::SearchFilters;
pub use stats::{CategoryCount, LanguageCount, SnippetStats};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};

/// Generate a fresh opaque identifier
///
/// Used by the store for snippet ids and by the client for the
/// session-scoped category and tag ids.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

//! Shared Error Types
//!
//! This module defines error types that are shared between the client and the backend.
//! These errors represent failure cases that both sides can detect on their own.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A required field is missing or blank
//! - `DocumentError` - A wire document is missing data the client depends on
//!
//! # Usage
//!
//! ```rust
//! use snipvault::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "title is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Malformed wire document
    #[error("Malformed document: {message}")]
    DocumentError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed-document error
    pub fn document(message: impl Into<String>) -> Self {
        Self::DocumentError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("code", "code is required");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "code");
                assert_eq!(message, "code is required");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_document_error_display() {
        let error = SharedError::document("missing _id");
        let display = format!("{}", error);
        assert!(display.contains("Malformed document"));
        assert!(display.contains("missing _id"));
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let shared_error: SharedError = result.unwrap_err().into();

        match shared_error {
            SharedError::SerializationError { .. } => {}
            _ => panic!("Expected SerializationError from serde error"),
        }
    }
}

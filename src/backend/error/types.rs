/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * - The body is not valid JSON for the endpoint
 * - A required snippet field is missing or blank
 *
 * ## Store Errors
 *
 * - The database was never connected
 * - A query failed or a row could not be decoded
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use snipvault::backend::error::BackendError;
///
/// let err = BackendError::invalid_body("expected an object");
/// assert!(err.message().contains("expected an object"));
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request body could not be parsed
    #[error("Invalid request body: {message}")]
    InvalidBody {
        /// Human-readable error message
        message: String,
    },

    /// No database pool is available
    ///
    /// The server keeps running when the database cannot be opened at
    /// startup; every store-backed request then fails with this error.
    #[error("Database is not connected")]
    DatabaseUnavailable,

    /// Query or decoding failure inside sqlx
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Shared error (validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new invalid-body error
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// The CRUD contract has no structured error codes, so this is
    /// always 500 Internal Server Error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the error message sent in the `error` field
    pub fn message(&self) -> String {
        match self {
            Self::SharedError(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_body_error() {
        let error = BackendError::invalid_body("missing field");
        match error {
            BackendError::InvalidBody { ref message } => {
                assert_eq!(message, "missing field");
            }
            _ => panic!("Expected InvalidBody"),
        }
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_shared_error() {
        let shared_error = SharedError::validation("title", "title is required");
        let backend_error: BackendError = shared_error.into();

        match backend_error {
            BackendError::SharedError(_) => {}
            _ => panic!("Expected SharedError variant"),
        }
        assert!(backend_error.message().contains("title is required"));
    }

    #[test]
    fn test_unavailable_message() {
        let error = BackendError::DatabaseUnavailable;
        assert_eq!(error.message(), "Database is not connected");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

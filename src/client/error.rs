//! Client error types
//!
//! [`ClientError`] describes what went wrong talking to the CRUD service;
//! [`SyncError`] is what the synchronizer reports to its callers.

use thiserror::Error;

use crate::shared::SharedError;

/// Transport-level failure from [`SnippetApiClient`](super::SnippetApiClient)
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not what the endpoint promises
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ClientError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ClientError::Malformed(message.into())
    }

    /// HTTP status of the failed request, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            ClientError::Malformed(_) => None,
        }
    }
}

/// Failure of a synchronizer operation
#[derive(Debug, Error)]
pub enum SyncError {
    /// A create, persist or delete did not complete on the server.
    /// The local snapshot is unchanged.
    #[error("remote write failed: {0}")]
    RemoteWrite(#[source] ClientError),

    /// Fetching the collection failed. The previous snapshot is kept.
    #[error("remote read failed: {0}")]
    RemoteRead(#[source] ClientError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] SharedError),
}

impl SyncError {
    pub fn not_found(id: impl Into<String>) -> Self {
        SyncError::NotFound(id.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SyncError::Validation(SharedError::validation(field, message))
    }
}

//! Snippet API Client
//!
//! This module provides async functions for the `/api/snippets` endpoints.
//! Every method issues exactly one request; there are no retries or timeouts
//! beyond what `reqwest` does by default.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::shared::{
    DeleteResponse, ErrorBody, HealthResponse, NewSnippet, Snippet, SnippetDocument,
    SnippetPatch,
};

/// Snippet API client
#[derive(Debug, Clone)]
pub struct SnippetApiClient {
    config: Config,
    client: Client,
}

impl SnippetApiClient {
    pub fn new(config: Config) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Reuse an existing `reqwest` client
    pub fn with_client(config: Config, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check that the service is up
    pub async fn ping(&self) -> Result<HealthResponse, ClientError> {
        let url = self.config.api_url("/api/test");
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    /// Fetch every snippet, most recently updated first
    ///
    /// A document without an identifier or timestamps fails the whole read.
    pub async fn list(&self) -> Result<Vec<Snippet>, ClientError> {
        let url = self.config.api_url("/api/snippets");
        let response = self.client.get(&url).send().await?;

        let documents: Vec<SnippetDocument> = read_json(response).await?;
        tracing::debug!("Fetched {} snippet documents", documents.len());

        documents
            .into_iter()
            .map(|doc| Snippet::try_from(doc).map_err(|e| ClientError::malformed(e.to_string())))
            .collect()
    }

    /// Create a snippet on the server
    ///
    /// Fails with [`ClientError::Malformed`] if the response carries no `_id`.
    pub async fn create(&self, input: &NewSnippet) -> Result<Snippet, ClientError> {
        let url = self.config.api_url("/api/snippets");
        let response = self.client.post(&url).json(input).send().await?;

        let document: SnippetDocument = read_json(response).await?;
        Snippet::try_from(document).map_err(|e| ClientError::malformed(e.to_string()))
    }

    /// Send a partial update
    ///
    /// Returns `None` when the server has no snippet with this id.
    pub async fn update(
        &self,
        id: &str,
        patch: &SnippetPatch,
    ) -> Result<Option<Snippet>, ClientError> {
        let url = self.config.api_url(&format!("/api/snippets/{}", id));
        let response = self.client.put(&url).json(patch).send().await?;

        let document: Option<SnippetDocument> = read_json(response).await?;
        document
            .map(|doc| Snippet::try_from(doc).map_err(|e| ClientError::malformed(e.to_string())))
            .transpose()
    }

    /// Delete a snippet; succeeds whether or not it existed
    pub async fn delete(&self, id: &str) -> Result<DeleteResponse, ClientError> {
        let url = self.config.api_url(&format!("/api/snippets/{}", id));
        let response = self.client.delete(&url).send().await?;
        read_json(response).await
    }
}

/// Decode a JSON response, turning non-success statuses into errors
///
/// The server's `{error}` body is used as the message when present.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(error_body) => error_body.error,
            Err(_) if body.trim().is_empty() => status.to_string(),
            Err(_) => body,
        };
        tracing::warn!("Request failed: {} - {}", status, message);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ClientError::malformed(e.to_string()))
}

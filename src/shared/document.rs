//! Wire documents for the `/api/snippets` endpoints
//!
//! The service speaks in documents keyed by `_id` with camelCase fields.
//! The client is lenient when reading them: missing optional fields fall
//! back to their defaults, but a document without an identifier or
//! timestamps is rejected when converted into a [`Snippet`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::snippet::Snippet;

/// A snippet document as stored and served by the CRUD service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Snippet> for SnippetDocument {
    fn from(snippet: Snippet) -> Self {
        Self {
            id: Some(snippet.id),
            title: snippet.title,
            description: snippet.description,
            code: snippet.code,
            language: snippet.language,
            category: snippet.category,
            tags: snippet.tags,
            is_favorite: snippet.is_favorite,
            created_at: Some(snippet.created_at),
            updated_at: Some(snippet.updated_at),
        }
    }
}

impl TryFrom<SnippetDocument> for Snippet {
    type Error = SharedError;

    fn try_from(doc: SnippetDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| SharedError::document("document has no _id"))?;
        let created_at = doc
            .created_at
            .ok_or_else(|| SharedError::document(format!("document {} has no createdAt", id)))?;
        let updated_at = doc
            .updated_at
            .ok_or_else(|| SharedError::document(format!("document {} has no updatedAt", id)))?;

        Ok(Snippet {
            id,
            title: doc.title,
            description: doc.description,
            code: doc.code,
            language: doc.language,
            category: doc.category,
            tags: doc.tags,
            is_favorite: doc.is_favorite,
            created_at,
            updated_at,
        })
    }
}

/// Body of `GET /api/test`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of a successful `DELETE /api/snippets/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Body of every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

//! Snippet HTTP Handlers
//!
//! This module contains the HTTP handlers for the snippet CRUD endpoints and
//! the liveness probe.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::{
    DeleteResponse, HealthResponse, NewSnippet, SnippetDocument, SnippetPatch,
};
use super::db;

/// Message returned by a successful delete
pub const DELETE_MESSAGE: &str = "Snippet deleted successfully";

/// Message returned by the liveness probe
pub const HEALTH_MESSAGE: &str = "Backend is working!";

fn require_pool(db_pool: &Option<SqlitePool>) -> Result<&SqlitePool, BackendError> {
    db_pool.as_ref().ok_or(BackendError::DatabaseUnavailable)
}

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
        timestamp: Utc::now(),
    })
}

/// List all snippets, most recently updated first
pub async fn list_snippets(
    State(db_pool): State<Option<SqlitePool>>,
) -> Result<Json<Vec<SnippetDocument>>, BackendError> {
    let pool = require_pool(&db_pool)?;

    let snippets = db::list_snippets(pool).await?;
    tracing::debug!("Listing {} snippets", snippets.len());

    Ok(Json(snippets.into_iter().map(SnippetDocument::from).collect()))
}

/// Create a snippet
pub async fn create_snippet(
    State(db_pool): State<Option<SqlitePool>>,
    payload: Result<Json<NewSnippet>, JsonRejection>,
) -> Result<Json<SnippetDocument>, BackendError> {
    let pool = require_pool(&db_pool)?;
    let Json(input) = payload?;
    input.validate()?;

    let snippet = db::insert_snippet(pool, input).await?;
    tracing::info!(id = %snippet.id, language = %snippet.language, "Snippet created");

    Ok(Json(SnippetDocument::from(snippet)))
}

/// Merge partial fields into a snippet
///
/// Answers `null` when no snippet has this id.
pub async fn update_snippet(
    State(db_pool): State<Option<SqlitePool>>,
    Path(id): Path<String>,
    payload: Result<Json<SnippetPatch>, JsonRejection>,
) -> Result<Json<Option<SnippetDocument>>, BackendError> {
    let pool = require_pool(&db_pool)?;
    let Json(patch) = payload?;
    patch.validate()?;

    let updated = db::update_snippet(pool, &id, patch).await?;
    match &updated {
        Some(_) => tracing::info!(id = %id, "Snippet updated"),
        None => tracing::warn!(id = %id, "Update for unknown snippet"),
    }

    Ok(Json(updated.map(SnippetDocument::from)))
}

/// Delete a snippet
///
/// Deleting an id that does not exist still succeeds.
pub async fn delete_snippet(
    State(db_pool): State<Option<SqlitePool>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, BackendError> {
    let pool = require_pool(&db_pool)?;

    if db::delete_snippet(pool, &id).await? {
        tracing::info!(id = %id, "Snippet deleted");
    } else {
        tracing::debug!(id = %id, "Delete for unknown snippet");
    }

    Ok(Json(DeleteResponse {
        message: DELETE_MESSAGE.to_string(),
    }))
}

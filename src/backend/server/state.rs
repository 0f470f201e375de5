/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` trait for Axum state extraction.
 *
 * # Thread Safety
 *
 * `SqlitePool` is internally reference counted and safe to clone into
 * every request. It is wrapped in `Option` because the server keeps
 * serving when the database could not be opened at startup.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(db_pool): State<Option<SqlitePool>>) {
 *     if let Some(pool) = db_pool {
 *         // query the store
 *     }
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared by every handler
#[derive(Clone, Default)]
pub struct AppState {
    /// Snippet store connection pool
    ///
    /// This is `None` if the database could not be opened. Handlers
    /// answer with an error instead of touching the store in that case.
    pub db_pool: Option<SqlitePool>,
}

impl AppState {
    pub fn new(db_pool: Option<SqlitePool>) -> Self {
        Self { db_pool }
    }
}

/// Implement FromRef for Option<SqlitePool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState`.
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

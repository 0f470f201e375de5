/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite snippet store (optional, see `config::load_database`)
 * 2. Build the application state
 * 3. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// A database that fails to open does not prevent startup; the failure is
/// logged and snippet routes answer 500 until the server is restarted.
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing snipvault backend server");

    let db_pool = load_database(config).await;
    let app = create_app_with_pool(db_pool);

    tracing::info!("Router configured");
    app
}

/// Create the application around an already opened pool
pub fn create_app_with_pool(db_pool: Option<SqlitePool>) -> Router<()> {
    create_router(AppState::new(db_pool))
}

/**
 * API Route Handlers
 *
 * This module wires the snippet endpoints into the router.
 *
 * # Routes
 *
 * - `GET /api/test` - Liveness probe
 * - `GET /api/snippets` - List snippets
 * - `POST /api/snippets` - Create a snippet
 * - `PUT /api/snippets/{id}` - Update a snippet
 * - `DELETE /api/snippets/{id}` - Delete a snippet
 */

use axum::routing::{get, put};
use axum::Router;

use crate::backend::server::state::AppState;
use crate::backend::snippets::{
    create_snippet, delete_snippet, health, list_snippets, update_snippet,
};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/test", get(health))
        .route("/api/snippets", get(list_snippets).post(create_snippet))
        .route(
            "/api/snippets/{id}",
            put(update_snippet).delete(delete_snippet),
        )
}

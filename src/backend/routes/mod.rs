//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware layers
//! └── api_routes.rs   - Snippet API endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /api/test` - Liveness probe
//! - `GET /api/snippets` - All snippets, most recently updated first
//! - `POST /api/snippets` - Create a snippet
//! - `PUT /api/snippets/{id}` - Partially update a snippet
//! - `DELETE /api/snippets/{id}` - Delete a snippet
//!
//! Anything else falls through to a JSON 404.
//!
//! # Example
//!
//! ```rust,no_run
//! use snipvault::backend::routes::create_router;
//! use snipvault::backend::server::state::AppState;
//!
//! let router = create_router(AppState::default());
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;

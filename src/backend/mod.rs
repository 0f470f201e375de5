//! Backend Module
//!
//! This module contains all server-side code for snipvault: a small Axum
//! HTTP service exposing CRUD endpoints over a SQLite document store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`snippets`** - Snippet handlers and database operations
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── snippets/       - Snippet handlers and store
//! └── error/          - Error types
//! ```
//!
//! # Endpoints
//!
//! - `GET /api/snippets` - All snippets, most recently updated first
//! - `POST /api/snippets` - Create a snippet
//! - `PUT /api/snippets/{id}` - Merge partial fields into a snippet
//! - `DELETE /api/snippets/{id}` - Delete a snippet
//! - `GET /api/test` - Liveness probe
//!
//! # Error Handling
//!
//! Every failure is answered with HTTP 500 and a JSON body of the form
//! `{"error": "..."}`. See [`error::BackendError`].

/// Server initialization and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Snippet handlers and database operations
pub mod snippets;

/// Backend error types
pub mod error;

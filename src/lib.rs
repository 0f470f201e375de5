//! snipvault - Personal Code Snippet Manager
//!
//! snipvault keeps a personal library of code snippets in a small REST service
//! and mirrors it into a client-side synchronizer that derives tags, search
//! results and dashboard statistics from the cached collection.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the client and the server
//!   - Snippet, category and tag models
//!   - Wire documents exchanged over `/api/snippets`
//!   - Search filters, statistics and error types
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server exposing the snippet CRUD endpoints
//!   - SQLite document store via sqlx
//!
//! - **`client`** - Client-side code
//!   - `SnippetApiClient`, a reqwest wrapper for the CRUD endpoints
//!   - `SnippetSync`, the local state synchronizer with subscriber support
//!   - Settings and export/import bundles
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary.
//!   The client compiles without it.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use snipvault::backend::server::init::create_app;
//! use snipvault::backend::server::config::ServerConfig;
//!
//! # async fn example() {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await;
//! // Serve `app` with axum::serve
//! # }
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use snipvault::client::{Config, SnippetSync};
//! use snipvault::shared::NewSnippet;
//!
//! # async fn example() -> Result<(), snipvault::client::SyncError> {
//! let sync = SnippetSync::new(Config::new());
//! sync.initialize().await;
//!
//! let created = sync
//!     .create(NewSnippet::new("Debounce", "const d = ...", "javascript"))
//!     .await?;
//! println!("created {}", created.id);
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client-side API access and state synchronization
pub mod client;

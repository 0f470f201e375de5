//! Client Module
//!
//! Client-side access to the snippet service and the local state mirror.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs          - Module exports
//! ├── config.rs       - Server URL configuration
//! ├── error.rs        - ClientError and SyncError
//! ├── api.rs          - reqwest wrapper for /api/snippets
//! ├── sync/           - SnippetSync and its pure helpers
//! │   ├── tags.rs     - Tag reducer
//! │   ├── search.rs   - Filtering and recency ordering
//! │   └── stats.rs    - Dashboard statistics
//! ├── settings.rs     - TOML-backed user preferences
//! └── export.rs       - JSON export/import bundles
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod settings;
pub mod sync;

pub use api::SnippetApiClient;
pub use config::Config;
pub use error::{ClientError, SyncError};
pub use export::{ExportBundle, ExportError};
pub use settings::{Settings, SettingsError, SettingsStore, Theme};
pub use sync::{SnippetSync, SyncEvent, SyncPhase};

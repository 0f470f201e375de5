//! Database test fixtures

use snipvault::backend::snippets::db;
use sqlx::SqlitePool;

/// A fresh in-memory store with the schema applied
pub async fn create_test_pool() -> SqlitePool {
    db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create in-memory snippet store")
}

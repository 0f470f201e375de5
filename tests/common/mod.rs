//! Common test utilities and helpers
//!
//! - In-memory SQLite pools with the snippet schema
//! - A real snippet server bound to an ephemeral port
//! - Wire document builders for mocked responses

#![allow(dead_code)]

pub mod database;
pub mod server;

#[allow(unused_imports)]
pub use database::*;
#[allow(unused_imports)]
pub use server::*;

use serde_json::json;

/// A complete wire document as the service would send it
pub fn snippet_document(id: &str, title: &str, tags: &[&str]) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "description": "",
        "code": "console.log(1);",
        "language": "javascript",
        "category": "1",
        "tags": tags,
        "isFavorite": false,
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-01T10:00:00.000Z"
    })
}

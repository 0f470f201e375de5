//! Database operations for snippets
//!
//! Snippets are stored one row per document. Tags are kept as a JSON array
//! column and timestamps as RFC 3339 text with millisecond precision, which
//! sorts lexicographically in time order.

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool};

use crate::shared::snippet::timestamp_now;
use crate::shared::{new_id, NewSnippet, Snippet, SnippetPatch};

const CREATE_SNIPPETS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS snippets (
        id TEXT PRIMARY KEY NOT NULL,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        code TEXT NOT NULL,
        language TEXT NOT NULL,
        category TEXT NOT NULL DEFAULT '',
        tags TEXT NOT NULL DEFAULT '[]',
        is_favorite INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

const CREATE_UPDATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_snippets_updated_at ON snippets (updated_at DESC)";

const SELECT_ALL: &str = "SELECT id, title, description, code, language, category, tags, is_favorite, created_at, updated_at \
     FROM snippets ORDER BY updated_at DESC, rowid ASC";

const SELECT_BY_ID: &str = "SELECT id, title, description, code, language, category, tags, is_favorite, created_at, updated_at \
     FROM snippets WHERE id = ?";

/// Open a connection pool and make sure the schema exists
///
/// In-memory databases live only as long as their connection, so the pool
/// never recycles idle connections for them.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections.max(1));
    if database_url.contains(":memory:") {
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }

    let pool = pool_options.connect_with(options).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Create the snippets table and its index if missing
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_SNIPPETS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_UPDATED_AT_INDEX).execute(pool).await?;
    Ok(())
}

/// All snippets, most recently updated first
pub async fn list_snippets(pool: &SqlitePool) -> Result<Vec<Snippet>, sqlx::Error> {
    let rows = sqlx::query(SELECT_ALL)
        .fetch_all(pool)
        .await?;

    rows.iter().map(snippet_from_row).collect()
}

/// Get a snippet by ID
pub async fn get_snippet<'e, E>(executor: E, id: &str) -> Result<Option<Snippet>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query(SELECT_BY_ID)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    row.as_ref().map(snippet_from_row).transpose()
}

/// Insert a new snippet with a fresh id and timestamps
pub async fn insert_snippet(pool: &SqlitePool, input: NewSnippet) -> Result<Snippet, sqlx::Error> {
    let snippet = input.into_snippet(new_id(), timestamp_now());

    sqlx::query(
        r#"
        INSERT INTO snippets (id, title, description, code, language, category, tags, is_favorite, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&snippet.id)
    .bind(&snippet.title)
    .bind(&snippet.description)
    .bind(&snippet.code)
    .bind(&snippet.language)
    .bind(&snippet.category)
    .bind(encode_tags(&snippet.tags)?)
    .bind(snippet.is_favorite)
    .bind(format_timestamp(&snippet.created_at))
    .bind(format_timestamp(&snippet.updated_at))
    .execute(pool)
    .await?;

    Ok(snippet)
}

/// Merge a patch into a stored snippet
///
/// Returns `None` when no snippet has this id.
pub async fn update_snippet(
    pool: &SqlitePool,
    id: &str,
    patch: SnippetPatch,
) -> Result<Option<Snippet>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(mut snippet) = get_snippet(&mut *tx, id).await? else {
        return Ok(None);
    };
    snippet.apply_patch(patch);

    sqlx::query(
        r#"
        UPDATE snippets
        SET title = ?, description = ?, code = ?, language = ?, category = ?, tags = ?, is_favorite = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&snippet.title)
    .bind(&snippet.description)
    .bind(&snippet.code)
    .bind(&snippet.language)
    .bind(&snippet.category)
    .bind(encode_tags(&snippet.tags)?)
    .bind(snippet.is_favorite)
    .bind(format_timestamp(&snippet.updated_at))
    .bind(&snippet.id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(snippet))
}

/// Delete a snippet, returning whether a row was removed
pub async fn delete_snippet(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM snippets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn snippet_from_row(row: &SqliteRow) -> Result<Snippet, sqlx::Error> {
    let tags: String = row.try_get("tags")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Snippet {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        code: row.try_get("code")?,
        language: row.try_get("language")?,
        category: row.try_get("category")?,
        tags: serde_json::from_str(&tags).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        is_favorite: row.try_get("is_favorite")?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

fn encode_tags(tags: &[String]) -> Result<String, sqlx::Error> {
    serde_json::to_string(tags).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

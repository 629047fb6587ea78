//! SQLite-backed key-value store for UI state that survives restarts.
//!
//! A single `kv` table holds one row per key; writes are upserts, so the
//! last writer wins. The only key today is the saved search text.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::constants::SEARCH_TEXT_KEY;

/// Small pool: the event loop reads once at startup and writes one row per
/// keystroke.
const POOL_SIZE: u32 = 4;

pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn open(path: &Path) -> Result<Self> {
        let db_url = format!("sqlite:{}?mode=rwc", path.display());

        let options = SqliteConnectOptions::from_str(&db_url)?
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(POOL_SIZE)
            .connect_with(options)
            .await
            .context("Failed to create connection pool")?;

        init_schema(&pool).await?;

        Ok(Self { pool })
    }

    #[cfg(test)]
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .context("Failed to create in-memory connection pool")?;

        init_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Store `value` under `key`, overwriting any prior value.
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Read the value stored under `key`, or `None` if it was never set.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    pub async fn save_search_text(&self, text: &str) -> Result<()> {
        self.set(SEARCH_TEXT_KEY, text).await
    }

    pub async fn load_search_text(&self) -> Result<Option<String>> {
        self.get(SEARCH_TEXT_KEY).await
    }
}

async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .context("Failed to initialize store schema")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_none_when_never_set() {
        let store = Store::open_in_memory().await.unwrap();
        assert_eq!(store.load_search_text().await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_roundtrips() {
        let store = Store::open_in_memory().await.unwrap();
        store.save_search_text("hello").await.unwrap();
        assert_eq!(
            store.load_search_text().await.unwrap(),
            Some("hello".to_string())
        );
    }

    #[tokio::test]
    async fn last_writer_wins() {
        let store = Store::open_in_memory().await.unwrap();
        store.save_search_text("first").await.unwrap();
        store.save_search_text("second").await.unwrap();
        assert_eq!(
            store.load_search_text().await.unwrap(),
            Some("second".to_string())
        );
    }

    #[tokio::test]
    async fn empty_string_is_a_stored_value() {
        let store = Store::open_in_memory().await.unwrap();
        store.save_search_text("hello").await.unwrap();
        store.save_search_text("").await.unwrap();
        assert_eq!(store.load_search_text().await.unwrap(), Some(String::new()));
    }
}

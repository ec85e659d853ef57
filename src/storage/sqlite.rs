//! `SQLite` storage backend.
//!
//! A single `feedback` table holds every record:
//!
//! ```text
//! feedback
//! ├── id             INTEGER PRIMARY KEY AUTOINCREMENT
//! ├── customer_name  TEXT     1..=100 chars
//! ├── feedback_text  TEXT     1..=1000 chars
//! ├── rating         INTEGER  1..=5
//! └── submitted_at   TEXT     RFC 3339, UTC
//! ```
//!
//! `AUTOINCREMENT` keeps ids from being reused after deletes. Writes are
//! serialized by `SQLite` itself; no extra locking is done here.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::{debug, info};

use crate::config::SqliteStorageConfig;
use crate::domain::{EXAMPLE_FEEDBACK, Feedback, NewFeedback};
use crate::error::StorageResult;
use crate::storage::traits::FeedbackStorage;

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS feedback (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_name TEXT    NOT NULL CHECK (customer_name <> '' AND length(customer_name) <= 100),
        feedback_text TEXT    NOT NULL CHECK (feedback_text <> '' AND length(feedback_text) <= 1000),
        rating        INTEGER NOT NULL CHECK (typeof(rating) = 'integer' AND rating BETWEEN 1 AND 5),
        submitted_at  TEXT    NOT NULL
    )";

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_feedback_submitted_at ON feedback (submitted_at DESC)";

const TABLE_EXISTS: &str = "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'feedback'";

const INSERT_EXAMPLE: &str = "
    INSERT INTO feedback (customer_name, feedback_text, rating, submitted_at)
    SELECT ?1, ?2, ?3, ?4
    WHERE NOT EXISTS (
        SELECT 1 FROM feedback WHERE customer_name = ?1 AND feedback_text = ?2
    )";

const COLUMNS: &str = "id, customer_name, feedback_text, rating, submitted_at";

/// `SQLite`-backed feedback storage.
pub struct SqliteStorage {
    pool: SqlitePool,
    seed_examples: bool,
    backend: &'static str,
}

impl SqliteStorage {
    /// Open (or create) the database file described by `config`.
    ///
    /// The parent directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the database cannot be opened.
    pub async fn open(config: &SqliteStorageConfig, seed_examples: bool) -> StorageResult<Self> {
        if let Some(parent) = config.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(config.busy_timeout));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!(path = %config.path.display(), "Database connected");

        Ok(Self {
            pool,
            seed_examples,
            backend: "sqlite",
        })
    }

    /// Create a private in-memory database.
    ///
    /// Every in-memory connection is a separate database, so the pool holds
    /// exactly one connection and never recycles it.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn in_memory(seed_examples: bool) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool,
            seed_examples,
            backend: "memory",
        })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Timestamps are stored with a fixed width so text order matches time order.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[async_trait]
impl FeedbackStorage for SqliteStorage {
    async fn initialize(&self) -> StorageResult<()> {
        let mut tx = self.pool.begin().await?;

        let existed = sqlx::query(TABLE_EXISTS)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();

        sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;
        sqlx::query(CREATE_INDEX).execute(&mut *tx).await?;

        if !existed && self.seed_examples {
            for (name, text, rating) in EXAMPLE_FEEDBACK {
                sqlx::query(INSERT_EXAMPLE)
                    .bind(name)
                    .bind(text)
                    .bind(rating)
                    .bind(timestamp(Utc::now()))
                    .execute(&mut *tx)
                    .await?;
            }
            info!(count = EXAMPLE_FEEDBACK.len(), "Example feedback seeded");
        }

        tx.commit().await?;

        debug!(created = !existed, "Feedback table ready");
        Ok(())
    }

    async fn create(&self, feedback: &NewFeedback) -> StorageResult<Feedback> {
        let record = sqlx::query_as::<_, Feedback>(&format!(
            "INSERT INTO feedback (customer_name, feedback_text, rating, submitted_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        ))
        .bind(&feedback.customer_name)
        .bind(&feedback.feedback_text)
        .bind(feedback.rating)
        .bind(timestamp(Utc::now()))
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_all(&self) -> StorageResult<Vec<Feedback>> {
        let records = sqlx::query_as::<_, Feedback>(&format!(
            "SELECT {COLUMNS} FROM feedback ORDER BY submitted_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<Option<Feedback>> {
        let record =
            sqlx::query_as::<_, Feedback>(&format!("SELECT {COLUMNS} FROM feedback WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<u64> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> StorageResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM feedback")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.unsigned_abs())
    }

    async fn health_check(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        self.backend
    }
}

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::error::Result;

const SCHEMA: &str = include_str!("../sql/schema.sql");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared handle to the athlete database.
///
/// Cloning is cheap: every clone refers to the same connection pool. Each
/// repository call checks a connection out of the pool and hands it back
/// when the call returns.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens a pool for `database_url`, creating the database file if missing.
    ///
    /// WAL lets readers proceed while a write is in flight; concurrent
    /// writers wait on the busy timeout instead of failing.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Private in-memory database. An in-memory SQLite database lives only as
    /// long as its connection, so the pool is pinned to one connection that
    /// never expires.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Creates the `athletes` table and its indexes when they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

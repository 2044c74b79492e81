use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading the scraper databases
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("{0} store is unreachable: {1}")]
    Unavailable(&'static str, String),

    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),
}

/// Pool settings shared by both stores
#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Open a lazily connecting, read-only pool over a SQLite database
///
/// The scrapers own the schema and the data; this service never writes.
/// Connections are only attempted on first use, so an absent database file
/// surfaces through health checks rather than at startup.
pub fn open_read_only(database_url: &str, config: PoolConfig) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StoreError::InvalidUrl(format!("{}: {}", database_url, e)))?
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options);

    Ok(pool)
}

/// Round-trip a trivial query to prove the database is reachable
pub async fn ping(pool: &SqlitePool, store: &'static str) -> Result<(), StoreError> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
        .map_err(|e| StoreError::Unavailable(store, e.to_string()))
}

/// Wrap a fragment for a `LIKE` substring search
#[inline]
pub(crate) fn contains_pattern(fragment: &str) -> String {
    format!("%{}%", fragment)
}

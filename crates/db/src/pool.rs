use std::{path::PathBuf, str::FromStr, time::Duration};

use anyhow::Result;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::log::LevelFilter;

/// Connection options shared by every pool
///
/// PRAGMAs are set on the options so each pooled connection gets them,
/// `foreign_keys` in particular is off by default in SQLite and the movie
/// table relies on it.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .pragma("cache_size", "-20000")
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug))
}

/// Create a pool with the PRAGMAs applied
///
/// In-memory databases live inside a single connection, callers passing
/// `sqlite::memory:` should ask for one connection.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// File backing a database url, used by the reset command
pub fn database_path(database_url: &str) -> Result<PathBuf> {
    let options = SqliteConnectOptions::from_str(database_url)?;

    Ok(options.get_filename().to_path_buf())
}

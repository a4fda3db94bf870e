//! Database migration utilities

use filmapi::Config;
use std::path::Path;

/// Create the database if missing and apply all migrations
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Migrating database {}", config.database.url);

    let pool = filmapi_db::create_pool(&config.database.url, 1).await?;
    filmapi_db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database file and run migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Dropping database");

    let db = filmapi_db::database_path(&config.database.url)?;

    // WAL mode leaves -wal and -shm files next to the database
    for suffix in ["", "-wal", "-shm"] {
        let mut path = db.clone().into_os_string();
        path.push(suffix);

        if Path::new(&path).exists() {
            std::fs::remove_file(&path)?;
            tracing::info!("Dropped {}", Path::new(&path).display());
        }
    }

    migrate(config).await?;

    Ok(())
}

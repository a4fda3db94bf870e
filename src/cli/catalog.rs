use filmapi::Config;
use filmapi_catalog::Catalog;

pub async fn seed(config: Config) -> anyhow::Result<()> {
    let pool = filmapi_db::create_pool(&config.database.url, 1).await?;
    filmapi_db::migrate(&pool).await?;

    if !Catalog::new(pool.clone()).seed_demo().await? {
        tracing::warn!("Catalog is not empty, demo data not loaded");
    }

    pool.close().await;

    Ok(())
}

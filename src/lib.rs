pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

use filmapi_catalog::Catalog;
use filmapi_user::{Command, Hasher};
use sqlx::SqlitePool;

/// Build the application state around an open pool
pub fn app_state(config: Config, pool: SqlitePool) -> anyhow::Result<AppState> {
    let hasher = Hasher::new(config.password)?;
    let tokens = auth::TokenService::new(&config.jwt.secret, config.jwt.lifetime_seconds);

    Ok(AppState {
        user_command: Command::new(pool.clone(), hasher),
        catalog: Catalog::new(pool.clone()),
        tokens,
        pool,
        config,
    })
}

/// Create app router, used by `serve` and the HTTP tests
pub fn create_app(config: Config, pool: SqlitePool) -> anyhow::Result<axum::Router> {
    Ok(routes::router(app_state(config, pool)?))
}

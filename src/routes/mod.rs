use std::any::Any;

use axum::{
    Json, Router,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use filmapi_catalog::Catalog;
use filmapi_user::Role;
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    auth::TokenService,
    middleware::{auth_middleware, require_role},
};

mod auth;
mod directors;
mod health;
mod movies;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub pool: SqlitePool,
    pub tokens: TokenService,
    pub user_command: filmapi_user::Command,
    pub catalog: Catalog,
}

pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "route not found"})),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "internal server error"})),
    )
        .into_response()
}

pub fn router(app_state: AppState) -> Router {
    // Any valid bearer token
    let authenticated = Router::new()
        .route("/movies", post(movies::create))
        .route("/movies/{id}", put(movies::update).delete(movies::delete))
        .route_layer(from_fn_with_state(
            app_state.tokens.clone(),
            auth_middleware,
        ));

    // Bearer token with the admin role, the last route_layer runs first
    let admin = Router::new()
        .route("/directors", post(directors::create))
        .route(
            "/directors/{id}",
            put(directors::update).delete(directors::delete),
        )
        .route_layer(from_fn_with_state(Role::Admin, require_role))
        .route_layer(from_fn_with_state(
            app_state.tokens.clone(),
            auth_middleware,
        ));

    let mut public = Router::new()
        .route("/status", get(health::status))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/movies", get(movies::list))
        .route("/movies/{id}", get(movies::show))
        .route("/directors", get(directors::list))
        .route("/directors/{id}", get(directors::show));

    if app_state.config.auth.allow_admin_registration {
        public = public.route("/auth/register-admin", post(auth::register_admin));
    }

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            public
                .merge(authenticated)
                .merge(admin)
                .with_state(app_state),
        )
        .fallback(fallback)
        // Known path, unsupported method
        .method_not_allowed_fallback(fallback)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

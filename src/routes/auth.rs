use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use filmapi_user::{Account, LoginInput, RegisterInput, Role};
use serde_json::{Value, json};

use super::AppState;
use crate::error::AppError;

/// POST /auth/register - Create a `user` account
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let Json(input) = payload?;
    let account = state.user_command.register(input, Role::User).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// POST /auth/register-admin - Create an `admin` account
///
/// Only mounted when `auth.allow_admin_registration` is set.
pub async fn register_admin(
    State(state): State<AppState>,
    payload: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let Json(input) = payload?;
    let account = state.user_command.register(input, Role::Admin).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

/// POST /auth/login - Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(input) = payload?;
    let account = state.user_command.login(input).await?;

    tracing::info!(user_id = account.id, username = %account.username, "Login succeeded");

    let token = state.tokens.issue(account.into())?;

    Ok(Json(json!({
        "message": "login successful",
        "token": token,
    })))
}

use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use filmapi_catalog::{Director, DirectorInput};
use serde_json::{Value, json};

use super::AppState;
use crate::{auth::AuthUser, error::AppError};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Director>>, AppError> {
    Ok(Json(state.catalog.list_directors().await?))
}

pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Director>, AppError> {
    let Path(id) = path?;

    Ok(Json(state.catalog.find_director(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    payload: Result<Json<DirectorInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Director>), AppError> {
    let Json(input) = payload?;
    let director = state.catalog.create_director(input).await?;

    tracing::info!(admin_id = admin.id, director_id = director.id, "Director added");

    Ok((StatusCode::CREATED, Json(director)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<DirectorInput>, JsonRejection>,
) -> Result<Json<Director>, AppError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let director = state.catalog.update_director(id, input).await?;

    tracing::info!(admin_id = admin.id, director_id = id, "Director updated");

    Ok(Json(director))
}

/// DELETE /directors/{id} - 400 while movies still reference the director
pub async fn delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    let director = state.catalog.delete_director(id).await?;

    tracing::info!(admin_id = admin.id, director_id = id, "Director removed");

    Ok(Json(json!({
        "message": "director deleted",
        "director": director,
    })))
}

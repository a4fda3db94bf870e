use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use filmapi_catalog::{Movie, MovieInput};
use serde_json::{Value, json};

use super::AppState;
use crate::{auth::AuthUser, error::AppError};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    Ok(Json(state.catalog.list_movies().await?))
}

pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Movie>, AppError> {
    let Path(id) = path?;

    Ok(Json(state.catalog.find_movie(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    let Json(input) = payload?;
    let movie = state.catalog.create_movie(input).await?;

    tracing::info!(user_id = user.id, movie_id = movie.id, "Movie added");

    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MovieInput>, JsonRejection>,
) -> Result<Json<Movie>, AppError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let movie = state.catalog.update_movie(id, input).await?;

    tracing::info!(user_id = user.id, movie_id = id, "Movie updated");

    Ok(Json(movie))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = path?;
    let movie = state.catalog.delete_movie(id).await?;

    tracing::info!(user_id = user.id, movie_id = id, "Movie removed");

    Ok(Json(json!({
        "message": "movie deleted",
        "movie": movie,
    })))
}

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use filmapi_catalog::CatalogError;
use filmapi_user::UserError;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::auth::TokenError;

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("access token required")]
    MissingToken,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("insufficient role")]
    Forbidden,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Referential(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Referential(_) => StatusCode::BAD_REQUEST,
            AppError::MissingToken | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken | AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Field messages of a failed validation, sorted by field name
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();

    if messages.is_empty() {
        "invalid request body".to_string()
    } else {
        messages.join(", ")
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validate(errors) => AppError::Validation(validation_message(&errors)),
            UserError::UsernameTaken => AppError::Conflict("username already taken".to_string()),
            UserError::InvalidCredentials => AppError::InvalidCredentials,
            UserError::NotFound => AppError::NotFound("account not found"),
            UserError::HashingError(e) => AppError::Internal(format!("password hashing: {e}")),
            UserError::DatabaseError(e) => AppError::Internal(format!("database: {e:?}")),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validate(errors) => AppError::Validation(validation_message(&errors)),
            CatalogError::MovieNotFound => AppError::NotFound("movie not found"),
            CatalogError::DirectorNotFound => AppError::NotFound("director not found"),
            e @ (CatalogError::UnknownDirector | CatalogError::DirectorInUse) => {
                AppError::Referential(e.to_string())
            }
            CatalogError::DatabaseError(e) => AppError::Internal(format!("database: {e:?}")),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(e) => AppError::Internal(format!("token signing: {e}")),
            TokenError::Malformed | TokenError::SignatureInvalid | TokenError::Expired => {
                AppError::InvalidToken
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::Validation("invalid JSON body".to_string())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected path parameter");
        AppError::Validation("invalid id".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let message = match self {
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                INTERNAL_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

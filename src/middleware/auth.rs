use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{auth::TokenService, error::AppError};

/// Credential part of an `Authorization: <scheme> <token>` header
fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_whitespace()
        .nth(1)
}

/// Authentication middleware that validates the bearer token
///
/// Inserts the [`AuthUser`](crate::auth::AuthUser) extension on success.
/// A missing token is a 401, any verification failure is the same 403.
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(&req) else {
        tracing::debug!("Missing bearer token");
        return Err(AppError::MissingToken);
    };

    let user = match tokens.verify(token) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected bearer token");
            return Err(e.into());
        }
    };

    tracing::debug!(user_id = user.id, role = %user.role, "Request authenticated");

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

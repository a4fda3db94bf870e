//! Role authorization middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use filmapi_user::Role;

use crate::{auth::AuthUser, error::AppError};

/// Exact role match, there is no hierarchy between roles
pub fn authorize(user: &AuthUser, required: Role) -> Result<(), AppError> {
    if user.role == required {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Rejects requests whose authenticated role differs from the state role
///
/// Must run after [`auth_middleware`](super::auth_middleware).
pub async fn require_role(
    State(required): State<Role>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(user) = request.extensions().get::<AuthUser>() else {
        tracing::error!("Role check reached without an authenticated user");
        return Err(AppError::MissingToken);
    };

    if let Err(e) = authorize(user, required) {
        tracing::warn!(
            user_id = user.id,
            role = %user.role,
            required = %required,
            "Role not allowed on route"
        );
        return Err(e);
    }

    Ok(next.run(request).await)
}

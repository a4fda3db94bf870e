use thiserror::Error;

/// Domain-specific errors for account operations
#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account not found")]
    NotFound,

    #[error("Password hashing failed: {0}")]
    HashingError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

pub type UserResult<T> = Result<T, UserError>;

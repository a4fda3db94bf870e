use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("Movie not found")]
    MovieNotFound,

    #[error("Director not found")]
    DirectorNotFound,

    #[error("director_id does not match any director")]
    UnknownDirector,

    #[error("Director is still referenced by movies")]
    DirectorInUse,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|e| e.is_foreign_key_violation())
}

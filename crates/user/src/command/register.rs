use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{Account, Role, UserResult, repository};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(
        required(message = "username is required"),
        custom(function = "validate_username")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 6, message = "password must be at least 6 characters")
    )]
    pub password: Option<String>,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::new("username")
            .with_message(Cow::Borrowed("username is required")));
    }

    Ok(())
}

impl super::Command {
    /// Create an account with the given role
    ///
    /// The password is hashed on the blocking pool before the insert.
    pub async fn register(&self, input: RegisterInput, role: Role) -> UserResult<Account> {
        input.validate()?;

        let username = super::normalize_username(&input.username.unwrap_or_default());
        let password = input.password.unwrap_or_default();
        let password_hash = self.hasher.hash_blocking(password).await?;

        let id = repository::create(&self.pool, username.to_owned(), password_hash, role).await?;

        tracing::info!(user_id = id, username = %username, role = %role, "Account registered");

        Ok(Account { id, username, role })
    }
}

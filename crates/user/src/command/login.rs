use serde::Deserialize;
use validator::Validate;

use crate::{Account, UserError, UserResult, repository};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(required(message = "username is required"))]
    pub username: Option<String>,
    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
}

impl super::Command {
    /// Check credentials and return the account they belong to
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn login(&self, input: LoginInput) -> UserResult<Account> {
        input.validate()?;

        let username = super::normalize_username(&input.username.unwrap_or_default());
        let password = input.password.unwrap_or_default();

        let Some(row) = repository::find_by_username(&self.pool, &username).await? else {
            self.hasher.verify_dummy_blocking(password).await;
            tracing::warn!(username = %username, "Login attempt for unknown account");
            return Err(UserError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify_blocking(password, row.password.clone())
            .await
        {
            tracing::warn!(user_id = row.id, "Login attempt with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        Ok(row.into())
    }
}

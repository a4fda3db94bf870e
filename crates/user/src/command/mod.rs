use sqlx::SqlitePool;

use crate::{Account, Hasher, UserResult, repository};

mod login;
mod register;
mod set_role;

pub use login::LoginInput;
pub use register::RegisterInput;

/// Entry point for account operations
#[derive(Clone)]
pub struct Command {
    pool: SqlitePool,
    hasher: Hasher,
}

impl Command {
    pub fn new(pool: SqlitePool, hasher: Hasher) -> Self {
        Self { pool, hasher }
    }

    pub async fn find_by_username(&self, username: &str) -> UserResult<Option<Account>> {
        Ok(
            repository::find_by_username(&self.pool, &normalize_username(username))
                .await?
                .map(Account::from),
        )
    }
}

/// Usernames are stored and looked up trimmed and lower-cased
pub(crate) fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

use crate::{Account, Role, UserError, UserResult, repository};

impl super::Command {
    /// Change the role of an existing account
    ///
    /// Tokens already issued keep the old role until they expire.
    pub async fn set_role(&self, username: &str, role: Role) -> UserResult<Account> {
        let username = super::normalize_username(username);

        if repository::update_role(&self.pool, &username, role).await? == 0 {
            return Err(UserError::NotFound);
        }

        self.find_by_username(&username)
            .await?
            .ok_or(UserError::NotFound)
    }
}

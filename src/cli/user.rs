use clap::ValueEnum;
use filmapi::Config;
use filmapi_user::{Command, Hasher, UserError};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Role {
    User,
    Admin,
}

impl From<Role> for filmapi_user::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::User => filmapi_user::Role::User,
            Role::Admin => filmapi_user::Role::Admin,
        }
    }
}

pub async fn set_role(config: Config, username: String, role: Role) -> anyhow::Result<()> {
    let pool = filmapi_db::create_pool(&config.database.url, 1).await?;
    let command = Command::new(pool.clone(), Hasher::new(config.password)?);

    match command.set_role(&username, role.into()).await {
        Ok(account) => {
            tracing::info!("{} now has the {} role", account.username, account.role);
        }
        Err(UserError::NotFound) => {
            tracing::error!("user {username} not found");
        }
        Err(e) => return Err(e.into()),
    }

    pool.close().await;

    Ok(())
}

use std::path::PathBuf;

use filmapi_user::{Account, Command, HashParams, Hasher, RegisterInput, Role};
use sqlx::SqlitePool;

pub struct TestState {
    pub pool: SqlitePool,
    pub command: Command,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let pool = filmapi_db::create_pool(&format!("sqlite:{}", path.to_str().unwrap()), 1).await?;
    filmapi_db::migrate(&pool).await?;

    // Cheap work factor, hashing cost is not under test here
    let hasher = Hasher::new(HashParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })?;

    Ok(TestState {
        command: Command::new(pool.clone(), hasher),
        pool,
    })
}

#[allow(dead_code)]
pub async fn create_user(
    state: &TestState,
    name: impl Into<String>,
    role: Role,
) -> anyhow::Result<Account> {
    Ok(state
        .command
        .register(
            RegisterInput {
                username: Some(name.into()),
                password: Some("my_password".to_owned()),
            },
            role,
        )
        .await?)
}

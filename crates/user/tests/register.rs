use filmapi_user::{RegisterInput, Role, UserError};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn register_defaults_to_user_role() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let account = state
        .command
        .register(
            RegisterInput {
                username: Some("John.Doe".to_owned()),
                password: Some("my_password".to_owned()),
            },
            Role::User,
        )
        .await?;

    assert_eq!(account.username, "john.doe");
    assert_eq!(account.role, Role::User);
    assert!(account.id > 0);

    Ok(())
}

#[tokio::test]
async fn password_is_stored_hashed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::create_user(&state, "john.doe", Role::User).await?;

    let (password,): (String,) = sqlx::query_as("SELECT password FROM account WHERE username = ?")
        .bind("john.doe")
        .fetch_one(&state.pool)
        .await?;

    assert_ne!(password, "my_password");
    assert!(password.starts_with("$argon2id$"));

    Ok(())
}

#[tokio::test]
async fn validate_unique_usernames_case_insensitively() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::create_user(&state, "john.doe", Role::User).await?;

    let duplicate = state
        .command
        .register(
            RegisterInput {
                username: Some("JOHN.DOE".to_owned()),
                password: Some("my_password_v2".to_owned()),
            },
            Role::Admin,
        )
        .await;

    assert!(matches!(duplicate, Err(UserError::UsernameTaken)));
    assert_eq!(
        duplicate.unwrap_err().to_string(),
        "Username already taken".to_owned()
    );

    Ok(())
}

#[tokio::test]
async fn rejects_short_or_missing_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let cases = [
        (Some("john"), Some("12345")),
        (None, Some("my_password")),
        (Some("john"), None),
        (Some("   "), Some("my_password")),
    ];

    for (username, password) in cases {
        let result = state
            .command
            .register(
                RegisterInput {
                    username: username.map(str::to_owned),
                    password: password.map(str::to_owned),
                },
                Role::User,
            )
            .await;

        assert!(
            matches!(result, Err(UserError::Validate(_))),
            "expected validation error for {username:?}/{password:?}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn six_character_password_is_enough() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let account = state
        .command
        .register(
            RegisterInput {
                username: Some("jane".to_owned()),
                password: Some("123456".to_owned()),
            },
            Role::Admin,
        )
        .await?;

    assert_eq!(account.role, Role::Admin);

    Ok(())
}

use filmapi_db::table::Account as AccountTable;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::{Account, Role, UserError, UserResult};

#[derive(FromRow)]
pub struct AccountRow {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub role: sqlx::types::Text<Role>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            role: row.role.0,
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|e| e.is_unique_violation())
}

pub(crate) async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> UserResult<Option<AccountRow>> {
    let statement = Query::select()
        .columns([
            AccountTable::Id,
            AccountTable::Username,
            AccountTable::Password,
            AccountTable::Role,
        ])
        .from(AccountTable::Table)
        .and_where(Expr::col(AccountTable::Username).eq(username))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, AccountRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Insert an account, the unique username index decides conflicts
pub(crate) async fn create(
    pool: &SqlitePool,
    username: String,
    password: String,
    role: Role,
) -> UserResult<i64> {
    let statement = Query::insert()
        .into_table(AccountTable::Table)
        .columns([
            AccountTable::Username,
            AccountTable::Password,
            AccountTable::Role,
        ])
        .values_panic([username.into(), password.into(), role.to_string().into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let result = sqlx::query_with(&sql, values)
        .execute(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                UserError::UsernameTaken
            } else {
                UserError::DatabaseError(e)
            }
        })?;

    Ok(result.last_insert_rowid())
}

pub(crate) async fn update_role(pool: &SqlitePool, username: &str, role: Role) -> UserResult<u64> {
    let statement = Query::update()
        .table(AccountTable::Table)
        .value(AccountTable::Role, role.to_string())
        .and_where(Expr::col(AccountTable::Username).eq(username))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected())
}

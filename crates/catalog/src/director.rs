use std::borrow::Cow;

use filmapi_db::table::Director as DirectorTable;
use sea_query::{Expr, ExprTrait, InsertStatement, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::{Validate, ValidationError};

use crate::{Catalog, CatalogError, CatalogResult, error::is_foreign_key_violation};

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Director {
    pub id: i64,
    pub name: String,
    #[serde(rename = "birthYear")]
    pub birth_year: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct DirectorInput {
    #[validate(
        required(message = "name is required"),
        custom(function = "validate_name")
    )]
    pub name: Option<String>,
    #[serde(rename = "birthYear")]
    #[validate(range(min = 1, message = "birthYear must be a positive year"))]
    pub birth_year: Option<i64>,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(
            ValidationError::new("name").with_message(Cow::Borrowed("name is required"))
        );
    }

    Ok(())
}

fn select_statement() -> SelectStatement {
    Query::select()
        .columns([
            DirectorTable::Id,
            DirectorTable::Name,
            DirectorTable::BirthYear,
        ])
        .from(DirectorTable::Table)
        .to_owned()
}

pub(crate) fn insert_statement(name: String, birth_year: Option<i64>) -> InsertStatement {
    Query::insert()
        .into_table(DirectorTable::Table)
        .columns([DirectorTable::Name, DirectorTable::BirthYear])
        .values_panic([name.into(), birth_year.into()])
        .to_owned()
}

impl Catalog {
    pub async fn list_directors(&self) -> CatalogResult<Vec<Director>> {
        let statement = select_statement()
            .order_by(DirectorTable::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Director, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn find_director(&self, id: i64) -> CatalogResult<Director> {
        let statement = select_statement()
            .and_where(Expr::col(DirectorTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, Director, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CatalogError::DirectorNotFound)
    }

    pub async fn create_director(&self, input: DirectorInput) -> CatalogResult<Director> {
        input.validate()?;

        let name = input.name.unwrap_or_default();
        let (sql, values) =
            insert_statement(name.to_owned(), input.birth_year).build_sqlx(SqliteQueryBuilder);

        let id = sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::info!(director_id = id, "Director created");

        Ok(Director {
            id,
            name,
            birth_year: input.birth_year,
        })
    }

    pub async fn update_director(&self, id: i64, input: DirectorInput) -> CatalogResult<Director> {
        input.validate()?;

        let name = input.name.unwrap_or_default();
        let statement = Query::update()
            .table(DirectorTable::Table)
            .value(DirectorTable::Name, name.to_owned())
            .value(DirectorTable::BirthYear, input.birth_year)
            .and_where(Expr::col(DirectorTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::DirectorNotFound);
        }

        Ok(Director {
            id,
            name,
            birth_year: input.birth_year,
        })
    }

    /// Delete a director and return the removed row
    ///
    /// Fails with [`CatalogError::DirectorInUse`] while movies reference it.
    pub async fn delete_director(&self, id: i64) -> CatalogResult<Director> {
        let mut tx = self.pool.begin().await?;

        let (sql, values) = select_statement()
            .and_where(Expr::col(DirectorTable::Id).eq(id))
            .to_owned()
            .build_sqlx(SqliteQueryBuilder);

        let Some(director) = sqlx::query_as_with::<_, Director, _>(&sql, values)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Err(CatalogError::DirectorNotFound);
        };

        let (sql, values) = Query::delete()
            .from_table(DirectorTable::Table)
            .and_where(Expr::col(DirectorTable::Id).eq(id))
            .to_owned()
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    CatalogError::DirectorInUse
                } else {
                    CatalogError::DatabaseError(e)
                }
            })?;

        tx.commit().await?;

        tracing::info!(director_id = id, "Director deleted");

        Ok(director)
    }
}

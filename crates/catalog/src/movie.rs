use std::borrow::Cow;

use filmapi_db::table::{Director as DirectorTable, Movie as MovieTable};
use sea_query::{
    Alias, Expr, ExprTrait, InsertStatement, Order, Query, SelectStatement, SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::{Validate, ValidationError};

use crate::{Catalog, CatalogError, CatalogResult, error::is_foreign_key_violation};

/// Movie joined with the name of its director
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i64,
    pub director_id: i64,
    pub director_name: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct MovieInput {
    #[validate(
        required(message = "title is required"),
        custom(function = "validate_title")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "director_id is required"),
        range(min = 1, message = "director_id is required")
    )]
    pub director_id: Option<i64>,
    #[validate(
        required(message = "year is required"),
        range(min = 1, message = "year is required")
    )]
    pub year: Option<i64>,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(
            ValidationError::new("title").with_message(Cow::Borrowed("title is required"))
        );
    }

    Ok(())
}

fn select_statement() -> SelectStatement {
    Query::select()
        .column((MovieTable::Table, MovieTable::Id))
        .column((MovieTable::Table, MovieTable::Title))
        .column((MovieTable::Table, MovieTable::Year))
        .column((MovieTable::Table, MovieTable::DirectorId))
        .expr_as(
            Expr::col((DirectorTable::Table, DirectorTable::Name)),
            Alias::new("director_name"),
        )
        .from(MovieTable::Table)
        .left_join(
            DirectorTable::Table,
            Expr::col((MovieTable::Table, MovieTable::DirectorId))
                .equals((DirectorTable::Table, DirectorTable::Id)),
        )
        .to_owned()
}

pub(crate) fn insert_statement(title: String, director_id: i64, year: i64) -> InsertStatement {
    Query::insert()
        .into_table(MovieTable::Table)
        .columns([MovieTable::Title, MovieTable::DirectorId, MovieTable::Year])
        .values_panic([title.into(), director_id.into(), year.into()])
        .to_owned()
}

fn map_write_error(err: sqlx::Error) -> CatalogError {
    if is_foreign_key_violation(&err) {
        CatalogError::UnknownDirector
    } else {
        CatalogError::DatabaseError(err)
    }
}

impl Catalog {
    pub async fn list_movies(&self) -> CatalogResult<Vec<Movie>> {
        let statement = select_statement()
            .order_by((MovieTable::Table, MovieTable::Id), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Movie, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn find_movie(&self, id: i64) -> CatalogResult<Movie> {
        let statement = select_statement()
            .and_where(Expr::col((MovieTable::Table, MovieTable::Id)).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, Movie, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CatalogError::MovieNotFound)
    }

    /// Insert a movie, an unknown director is reported by the foreign key
    pub async fn create_movie(&self, input: MovieInput) -> CatalogResult<Movie> {
        input.validate()?;

        let (sql, values) = insert_statement(
            input.title.unwrap_or_default(),
            input.director_id.unwrap_or_default(),
            input.year.unwrap_or_default(),
        )
        .build_sqlx(SqliteQueryBuilder);

        let id = sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?
            .last_insert_rowid();

        tracing::info!(movie_id = id, "Movie created");

        self.find_movie(id).await
    }

    pub async fn update_movie(&self, id: i64, input: MovieInput) -> CatalogResult<Movie> {
        input.validate()?;

        let statement = Query::update()
            .table(MovieTable::Table)
            .value(MovieTable::Title, input.title.unwrap_or_default())
            .value(MovieTable::DirectorId, input.director_id.unwrap_or_default())
            .value(MovieTable::Year, input.year.unwrap_or_default())
            .and_where(Expr::col(MovieTable::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::MovieNotFound);
        }

        self.find_movie(id).await
    }

    /// Delete a movie and return the removed row
    pub async fn delete_movie(&self, id: i64) -> CatalogResult<Movie> {
        let mut tx = self.pool.begin().await?;

        let (sql, values) = select_statement()
            .and_where(Expr::col((MovieTable::Table, MovieTable::Id)).eq(id))
            .to_owned()
            .build_sqlx(SqliteQueryBuilder);

        let Some(movie) = sqlx::query_as_with::<_, Movie, _>(&sql, values)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Err(CatalogError::MovieNotFound);
        };

        let (sql, values) = Query::delete()
            .from_table(MovieTable::Table)
            .and_where(Expr::col(MovieTable::Id).eq(id))
            .to_owned()
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        tx.commit().await?;

        tracing::info!(movie_id = id, "Movie deleted");

        Ok(movie)
    }
}

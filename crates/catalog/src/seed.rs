use filmapi_db::table::Director as DirectorTable;
use sea_query::{Expr, Func, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Catalog, CatalogResult, director, movie};

const DIRECTORS: [(&str, i64); 5] = [
    ("Christopher Nolan", 1970),
    ("Hayao Miyazaki", 1941),
    ("Bong Joon-ho", 1969),
    ("Greta Gerwig", 1983),
    ("Denis Villeneuve", 1967),
];

/// Title, year and index into [`DIRECTORS`]
const MOVIES: [(&str, i64, usize); 5] = [
    ("Parasite", 2019, 2),
    ("The Dark Knight", 2008, 0),
    ("Interstellar", 2014, 0),
    ("Spirited Away", 2001, 1),
    ("Oppenheimer", 2023, 0),
];

impl Catalog {
    /// Load the demo directors and movies into an empty catalog
    ///
    /// Returns `false` without touching anything when a director already exists.
    pub async fn seed_demo(&self) -> CatalogResult<bool> {
        let mut tx = self.pool.begin().await?;

        let (sql, values) = Query::select()
            .expr(Func::count(Expr::col(DirectorTable::Id)))
            .from(DirectorTable::Table)
            .to_owned()
            .build_sqlx(SqliteQueryBuilder);

        let (count,): (i64,) = sqlx::query_as_with(&sql, values)
            .fetch_one(&mut *tx)
            .await?;

        if count > 0 {
            tracing::info!(directors = count, "Catalog already populated, skipping seed");
            return Ok(false);
        }

        let mut director_ids = Vec::with_capacity(DIRECTORS.len());
        for (name, birth_year) in DIRECTORS {
            let (sql, values) = director::insert_statement(name.to_owned(), Some(birth_year))
                .build_sqlx(SqliteQueryBuilder);

            let id = sqlx::query_with(&sql, values)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid();

            director_ids.push(id);
        }

        for (title, year, director) in MOVIES {
            let (sql, values) = movie::insert_statement(title.to_owned(), director_ids[director], year)
                .build_sqlx(SqliteQueryBuilder);

            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(
            directors = DIRECTORS.len(),
            movies = MOVIES.len(),
            "Demo catalog seeded"
        );

        Ok(true)
    }
}

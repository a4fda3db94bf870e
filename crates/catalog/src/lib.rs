//! Movie catalog: directors, movies and the demo data set

mod director;
mod error;
mod movie;
mod seed;

use sqlx::SqlitePool;

pub use director::{Director, DirectorInput};
pub use error::{CatalogError, CatalogResult};
pub use movie::{Movie, MovieInput};

/// Catalog store, every operation is a parameterized query on the pool
#[derive(Clone)]
pub struct Catalog {
    pool: SqlitePool,
}

impl Catalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

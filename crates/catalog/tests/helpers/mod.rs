use std::path::PathBuf;

use filmapi_catalog::{Catalog, Director, DirectorInput, Movie, MovieInput};

pub async fn setup_catalog(path: PathBuf) -> anyhow::Result<Catalog> {
    let pool = filmapi_db::create_pool(&format!("sqlite:{}", path.to_str().unwrap()), 1).await?;
    filmapi_db::migrate(&pool).await?;

    Ok(Catalog::new(pool))
}

#[allow(dead_code)]
pub async fn create_director(catalog: &Catalog, name: &str) -> anyhow::Result<Director> {
    Ok(catalog
        .create_director(DirectorInput {
            name: Some(name.to_owned()),
            birth_year: Some(1970),
        })
        .await?)
}

#[allow(dead_code)]
pub async fn create_movie(
    catalog: &Catalog,
    title: &str,
    director_id: i64,
) -> anyhow::Result<Movie> {
    Ok(catalog
        .create_movie(MovieInput {
            title: Some(title.to_owned()),
            director_id: Some(director_id),
            year: Some(2010),
        })
        .await?)
}

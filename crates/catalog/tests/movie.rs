use filmapi_catalog::{CatalogError, MovieInput};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn create_movie_joins_director_name() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = helpers::setup_catalog(dir.child("db.sqlite3")).await?;
    let director = helpers::create_director(&catalog, "Céline Sciamma").await?;

    let movie = catalog
        .create_movie(MovieInput {
            title: Some("Portrait of a Lady on Fire".to_owned()),
            director_id: Some(director.id),
            year: Some(2019),
        })
        .await?;

    assert!(movie.id > 0);
    assert_eq!(movie.title, "Portrait of a Lady on Fire");
    assert_eq!(movie.year, 2019);
    assert_eq!(movie.director_id, director.id);
    assert_eq!(movie.director_name.as_deref(), Some("Céline Sciamma"));
    assert_eq!(catalog.find_movie(movie.id).await?, movie);

    Ok(())
}

#[tokio::test]
async fn validate_required_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = helpers::setup_catalog(dir.child("db.sqlite3")).await?;
    let director = helpers::create_director(&catalog, "Someone").await?;

    let inputs = [
        MovieInput {
            title: None,
            director_id: Some(director.id),
            year: Some(2000),
        },
        MovieInput {
            title: Some(String::new()),
            director_id: Some(director.id),
            year: Some(2000),
        },
        MovieInput {
            title: Some(" \t ".to_owned()),
            director_id: Some(director.id),
            year: Some(2000),
        },
        MovieInput {
            title: Some("No Director".to_owned()),
            director_id: None,
            year: Some(2000),
        },
        MovieInput {
            title: Some("No Year".to_owned()),
            director_id: Some(director.id),
            year: None,
        },
    ];

    for input in inputs {
        let result = catalog.create_movie(input).await;
        assert!(matches!(result, Err(CatalogError::Validate(_))));
    }

    assert!(catalog.list_movies().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn unknown_director_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = helpers::setup_catalog(dir.child("db.sqlite3")).await?;
    let director = helpers::create_director(&catalog, "Real").await?;
    let movie = helpers::create_movie(&catalog, "Real Movie", director.id).await?;

    let create = catalog
        .create_movie(MovieInput {
            title: Some("Ghost".to_owned()),
            director_id: Some(999),
            year: Some(2000),
        })
        .await;
    assert!(matches!(create, Err(CatalogError::UnknownDirector)));

    let update = catalog
        .update_movie(
            movie.id,
            MovieInput {
                title: Some("Ghost".to_owned()),
                director_id: Some(999),
                year: Some(2000),
            },
        )
        .await;
    assert!(matches!(update, Err(CatalogError::UnknownDirector)));
    assert_eq!(catalog.find_movie(movie.id).await?, movie);

    Ok(())
}

#[tokio::test]
async fn update_movie_replaces_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = helpers::setup_catalog(dir.child("db.sqlite3")).await?;
    let first = helpers::create_director(&catalog, "First").await?;
    let second = helpers::create_director(&catalog, "Second").await?;
    let movie = helpers::create_movie(&catalog, "Draft", first.id).await?;

    let updated = catalog
        .update_movie(
            movie.id,
            MovieInput {
                title: Some("Final Cut".to_owned()),
                director_id: Some(second.id),
                year: Some(2024),
            },
        )
        .await?;

    assert_eq!(updated.id, movie.id);
    assert_eq!(updated.title, "Final Cut");
    assert_eq!(updated.year, 2024);
    assert_eq!(updated.director_id, second.id);
    assert_eq!(updated.director_name.as_deref(), Some("Second"));

    Ok(())
}

#[tokio::test]
async fn missing_movie_is_not_found() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = helpers::setup_catalog(dir.child("db.sqlite3")).await?;
    let director = helpers::create_director(&catalog, "Someone").await?;

    assert!(matches!(
        catalog.find_movie(7).await,
        Err(CatalogError::MovieNotFound)
    ));

    let update = catalog
        .update_movie(
            7,
            MovieInput {
                title: Some("Nothing".to_owned()),
                director_id: Some(director.id),
                year: Some(2000),
            },
        )
        .await;
    assert!(matches!(update, Err(CatalogError::MovieNotFound)));

    assert!(matches!(
        catalog.delete_movie(7).await,
        Err(CatalogError::MovieNotFound)
    ));

    Ok(())
}

#[tokio::test]
async fn delete_movie_returns_removed_row() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = helpers::setup_catalog(dir.child("db.sqlite3")).await?;
    let director = helpers::create_director(&catalog, "Someone").await?;
    let keep = helpers::create_movie(&catalog, "Keep", director.id).await?;
    let removed = helpers::create_movie(&catalog, "Drop", director.id).await?;

    let deleted = catalog.delete_movie(removed.id).await?;

    assert_eq!(deleted, removed);
    assert_eq!(catalog.list_movies().await?, vec![keep]);

    Ok(())
}

mod common;

use database::services::{
    ServiceError, actor::ActorService, cinema_hall::CinemaHallService, genre::GenreService,
};
use models::catalog::{ActorInput, CinemaHallInput, GenreInput};

fn genre(name: &str) -> GenreInput {
    GenreInput {
        name: Some(name.to_string()),
    }
}

#[tokio::test]
async fn test_genre_crud() {
    let db = &common::setup().await;

    let drama = GenreService::create(db, genre("Drama")).await.unwrap();
    let comedy = GenreService::create(db, genre("Comedy")).await.unwrap();
    assert_eq!(drama.name, "Drama");

    let genres = GenreService::list(db).await.unwrap();
    assert_eq!(
        genres.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![drama.id, comedy.id]
    );

    let renamed = GenreService::update(db, comedy.id, genre("Satire"), false)
        .await
        .unwrap();
    assert_eq!(renamed.name, "Satire");
    assert_eq!(GenreService::get(db, comedy.id).await.unwrap().name, "Satire");

    GenreService::delete(db, drama.id).await.unwrap();
    assert!(matches!(
        GenreService::get(db, drama.id).await,
        Err(ServiceError::NotFound { .. })
    ));
    assert!(matches!(
        GenreService::delete(db, drama.id).await,
        Err(ServiceError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_genre_names_are_unique() {
    let db = &common::setup().await;

    GenreService::create(db, genre("Horror")).await.unwrap();
    let thriller = GenreService::create(db, genre("Thriller")).await.unwrap();

    let err = GenreService::create(db, genre("Horror")).await.unwrap_err();
    assert!(err.field_errors().unwrap().contains("name"));

    let err = GenreService::update(db, thriller.id, genre("Horror"), false)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    // Renaming to its own name is not a clash
    GenreService::update(db, thriller.id, genre("Thriller"), false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_blank_genre_rejected() {
    let db = &common::setup().await;

    let err = GenreService::create(db, genre("  ")).await.unwrap_err();
    assert!(err.field_errors().unwrap().contains("name"));

    let err = GenreService::create(db, GenreInput::default())
        .await
        .unwrap_err();
    assert!(err.field_errors().unwrap().contains("name"));
    assert!(GenreService::list(db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_actor_partial_update() {
    let db = &common::setup().await;

    let actor = ActorService::create(
        db,
        ActorInput {
            first_name: Some("Tom".to_string()),
            last_name: Some("Hanks".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(actor.full_name(), "Tom Hanks");

    let patch = ActorInput {
        first_name: Some("Thomas".to_string()),
        last_name: None,
    };
    let updated = ActorService::update(db, actor.id, patch.clone(), true)
        .await
        .unwrap();
    assert_eq!(updated.full_name(), "Thomas Hanks");

    // A full update needs every field
    let err = ActorService::update(db, actor.id, patch, false)
        .await
        .unwrap_err();
    assert!(err.field_errors().unwrap().contains("last_name"));
}

#[tokio::test]
async fn test_cinema_hall_capacity_and_validation() {
    let db = &common::setup().await;

    let hall = common::hall(db, 10, 12).await;
    assert_eq!(hall.capacity(), 120);

    let err = CinemaHallService::create(
        db,
        CinemaHallInput {
            name: Some("Broken".to_string()),
            rows: Some(0),
            seats_in_row: Some(-1),
        },
    )
    .await
    .unwrap_err();
    let errors = err.field_errors().unwrap();
    assert!(errors.contains("rows"));
    assert!(errors.contains("seats_in_row"));

    let resized = CinemaHallService::update(
        db,
        hall.id,
        CinemaHallInput {
            rows: Some(4),
            ..Default::default()
        },
        true,
    )
    .await
    .unwrap();
    assert_eq!(resized.capacity(), 48);
    assert_eq!(CinemaHallService::list(db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let db = &common::setup().await;

    let err = CinemaHallService::update(db, 42, CinemaHallInput::default(), true)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { id: 42, .. }));
}

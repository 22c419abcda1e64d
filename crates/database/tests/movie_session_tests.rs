mod common;

use common::at;
use database::services::{
    ServiceError, movie::MovieService, movie_session::MovieSessionService, order::OrderService,
};
use models::{
    movie_session::{MovieSessionFilter, MovieSessionInput},
    seat::Seat,
};

#[tokio::test]
async fn test_session_requires_existing_references() {
    let db = &common::setup().await;
    let hall = common::hall(db, 5, 5).await;

    let err = MovieSessionService::create(
        db,
        MovieSessionInput {
            show_time: Some(at(2024, 5, 1, 18)),
            movie: Some(77),
            cinema_hall: Some(hall.id),
        },
    )
    .await
    .unwrap_err();

    let errors = err.field_errors().unwrap();
    assert!(errors.contains("movie"));
    assert!(!errors.contains("cinema_hall"));

    let err = MovieSessionService::create(db, MovieSessionInput::default())
        .await
        .unwrap_err();
    assert!(err.field_errors().unwrap().contains("show_time"));
}

#[tokio::test]
async fn test_list_filters_by_date_and_movie() {
    let db = &common::setup().await;
    let hall = common::hall(db, 10, 12).await;
    let alien = common::movie(db, "Alien").await;
    let heat = common::movie(db, "Heat").await;

    let late = common::session(db, alien.id, hall.id, at(2024, 5, 1, 21)).await;
    let early = common::session(db, alien.id, hall.id, at(2024, 5, 1, 0)).await;
    common::session(db, alien.id, hall.id, at(2024, 5, 2, 0)).await;
    let other = common::session(db, heat.id, hall.id, at(2024, 5, 1, 18)).await;

    let ids = |filter: MovieSessionFilter| async move {
        MovieSessionService::list(db, &filter)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.session.id)
            .collect::<Vec<_>>()
    };

    let may_first = chrono::NaiveDate::from_ymd_opt(2024, 5, 1);
    assert_eq!(
        ids(MovieSessionFilter {
            date: may_first,
            movie: Some(alien.id),
        })
        .await,
        vec![early.id, late.id]
    );
    assert_eq!(
        ids(MovieSessionFilter {
            date: may_first,
            movie: None,
        })
        .await,
        vec![early.id, other.id, late.id]
    );
    assert_eq!(ids(MovieSessionFilter::default()).await.len(), 4);
}

#[tokio::test]
async fn test_summary_reports_capacity_and_remaining_tickets() {
    let db = &common::setup().await;
    let hall = common::hall(db, 10, 12).await;
    let movie = common::movie(db, "Alien").await;
    let session = common::session(db, movie.id, hall.id, at(2024, 5, 1, 18)).await;

    OrderService::create(
        db,
        "alice",
        vec![common::ticket(session.id, 1, 1), common::ticket(session.id, 1, 2)],
    )
    .await
    .unwrap();

    let summaries = MovieSessionService::list(db, &MovieSessionFilter::default())
        .await
        .unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].movie_title, "Alien");
    assert_eq!(summaries[0].cinema_hall_name, hall.name);
    assert_eq!(summaries[0].capacity, 120);
    assert_eq!(summaries[0].tickets_available, 118);
}

#[tokio::test]
async fn test_availability_lists_exactly_the_sold_seats() {
    let db = &common::setup().await;
    let hall = common::hall(db, 4, 6).await;
    let movie = common::movie(db, "Heat").await;
    let session = common::session(db, movie.id, hall.id, at(2024, 5, 1, 18)).await;
    let other = common::session(db, movie.id, hall.id, at(2024, 5, 1, 21)).await;

    let empty = MovieSessionService::availability(db, session.id).await.unwrap();
    assert!(empty.taken_places.is_empty());

    OrderService::create(
        db,
        "alice",
        vec![common::ticket(session.id, 2, 5), common::ticket(session.id, 1, 3)],
    )
    .await
    .unwrap();
    OrderService::create(db, "bob", vec![common::ticket(other.id, 1, 1)])
        .await
        .unwrap();

    let availability = MovieSessionService::availability(db, session.id).await.unwrap();
    assert_eq!(availability.session, session);
    assert_eq!(availability.movie.movie.title, "Heat");
    assert_eq!(availability.cinema_hall.capacity(), 24);
    assert_eq!(
        availability.taken_places,
        vec![Seat::new(1, 3), Seat::new(2, 5)]
    );
}

#[tokio::test]
async fn test_availability_unknown_session() {
    let db = &common::setup().await;

    let err = MovieSessionService::availability(db, 1).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { id: 1, .. }));
}

#[tokio::test]
async fn test_deleting_movie_removes_its_sessions() {
    let db = &common::setup().await;
    let hall = common::hall(db, 4, 6).await;
    let movie = common::movie(db, "Heat").await;
    let session = common::session(db, movie.id, hall.id, at(2024, 5, 1, 18)).await;

    MovieService::delete(db, movie.id).await.unwrap();

    assert!(matches!(
        MovieSessionService::get(db, session.id).await,
        Err(ServiceError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_partial_update_moves_session() {
    let db = &common::setup().await;
    let small = common::hall(db, 4, 6).await;
    let big = common::hall(db, 20, 30).await;
    let movie = common::movie(db, "Heat").await;
    let session = common::session(db, movie.id, small.id, at(2024, 5, 1, 18)).await;

    let moved = MovieSessionService::update(
        db,
        session.id,
        MovieSessionInput {
            cinema_hall: Some(big.id),
            ..Default::default()
        },
        true,
    )
    .await
    .unwrap();
    assert_eq!(moved.cinema_hall_id, big.id);
    assert_eq!(moved.show_time, session.show_time);

    let err = MovieSessionService::update(
        db,
        session.id,
        MovieSessionInput {
            cinema_hall: Some(999),
            ..Default::default()
        },
        true,
    )
    .await
    .unwrap_err();
    assert!(err.field_errors().unwrap().contains("cinema_hall"));
}

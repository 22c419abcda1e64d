mod common;

use common::{at, ticket};
use database::{
    entities::{order, ticket as ticket_entity},
    services::{ServiceError, movie_session::MovieSessionService, order::OrderService},
};
use models::order::PageRequest;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

struct Fixture {
    session: i32,
    other_session: i32,
}

async fn fixture(db: &DatabaseConnection) -> Fixture {
    let hall = common::hall(db, 10, 12).await;
    let movie = common::movie(db, "Alien").await;
    let session = common::session(db, movie.id, hall.id, at(2024, 5, 1, 18)).await;
    let other = common::session(db, movie.id, hall.id, at(2024, 5, 1, 21)).await;
    Fixture {
        session: session.id,
        other_session: other.id,
    }
}

async fn counts(db: &DatabaseConnection) -> (u64, u64) {
    (
        order::Entity::find().count(db).await.unwrap(),
        ticket_entity::Entity::find().count(db).await.unwrap(),
    )
}

#[tokio::test]
async fn test_create_order_with_tickets() {
    let db = &common::setup().await;
    let f = fixture(db).await;

    let created = OrderService::create(
        db,
        "alice",
        vec![
            ticket(f.session, 1, 1),
            ticket(f.session, 1, 2),
            ticket(f.other_session, 1, 1),
        ],
    )
    .await
    .unwrap();

    assert_eq!(created.order.user_id, "alice");
    assert_eq!(created.tickets.len(), 3);
    assert_eq!(created.tickets[0].ticket.row_number, 1);
    assert_eq!(created.tickets[1].ticket.seat_number, 2);
    assert_eq!(created.tickets[2].session.session.id, f.other_session);
    assert_eq!(created.tickets[0].session.movie_title, "Alien");
    assert_eq!(counts(db).await, (1, 3));
}

#[tokio::test]
async fn test_double_booking_is_a_conflict() {
    let db = &common::setup().await;
    let f = fixture(db).await;

    OrderService::create(db, "alice", vec![ticket(f.session, 1, 1)])
        .await
        .unwrap();

    let err = OrderService::create(db, "bob", vec![ticket(f.session, 1, 1)])
        .await
        .unwrap_err();
    let errors = match err {
        ServiceError::Conflict(errors) => errors,
        other => panic!("expected a conflict, got {other:?}"),
    };
    assert!(errors.contains("tickets.0.seat"));
    assert_eq!(counts(db).await, (1, 1));

    // Same seat in a different session is fine
    OrderService::create(db, "bob", vec![ticket(f.other_session, 1, 1)])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_one_bad_line_item_persists_nothing() {
    let db = &common::setup().await;
    let f = fixture(db).await;

    let err = OrderService::create(
        db,
        "alice",
        vec![
            ticket(f.session, 1, 1),
            ticket(f.session, 11, 1),
            ticket(f.session, 2, 13),
            ticket(999, 1, 1),
        ],
    )
    .await
    .unwrap_err();

    let errors = match err {
        ServiceError::Validation(errors) => errors,
        other => panic!("expected a validation error, got {other:?}"),
    };
    assert_eq!(
        errors.get("tickets.1.row"),
        Some(&["row must be in range [1, 10]".to_string()][..])
    );
    assert_eq!(
        errors.get("tickets.2.seat"),
        Some(&["seat must be in range [1, 12]".to_string()][..])
    );
    assert!(errors.contains("tickets.3.movie_session"));
    assert!(!errors.contains("tickets.0.seat"));
    assert_eq!(counts(db).await, (0, 0));
}

#[tokio::test]
async fn test_duplicate_seat_within_one_order() {
    let db = &common::setup().await;
    let f = fixture(db).await;

    let err = OrderService::create(
        db,
        "alice",
        vec![ticket(f.session, 3, 3), ticket(f.session, 3, 3)],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
    assert!(err.field_errors().unwrap().contains("tickets.1.seat"));
    assert_eq!(counts(db).await, (0, 0));
}

#[tokio::test]
async fn test_empty_order_rejected() {
    let db = &common::setup().await;

    let err = OrderService::create(db, "alice", vec![]).await.unwrap_err();
    assert!(err.field_errors().unwrap().contains("tickets"));
    assert_eq!(counts(db).await, (0, 0));
}

#[tokio::test]
async fn test_orders_are_scoped_to_their_owner() {
    let db = &common::setup().await;
    let f = fixture(db).await;

    let alices = OrderService::create(db, "alice", vec![ticket(f.session, 1, 1)])
        .await
        .unwrap();
    OrderService::create(db, "bob", vec![ticket(f.session, 1, 2)])
        .await
        .unwrap();

    let (orders, total) = OrderService::list(db, "alice", PageRequest::orders(None).unwrap())
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert!(orders.iter().all(|o| o.order.user_id == "alice"));

    assert!(matches!(
        OrderService::get(db, "bob", alices.order.id).await,
        Err(ServiceError::NotFound { .. })
    ));
    assert_eq!(
        OrderService::get(db, "alice", alices.order.id)
            .await
            .unwrap()
            .tickets
            .len(),
        1
    );
}

#[tokio::test]
async fn test_orders_paginate_newest_first() {
    let db = &common::setup().await;
    let f = fixture(db).await;

    let mut ids = Vec::new();
    for seat in 1..=12 {
        let created = OrderService::create(db, "alice", vec![ticket(f.session, 1, seat)])
            .await
            .unwrap();
        ids.push(created.order.id);
    }

    let (first, total) = OrderService::list(db, "alice", PageRequest::orders(Some(1)).unwrap())
        .await
        .unwrap();
    assert_eq!(total, 12);
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].order.id, ids[11]);

    let (second, _) = OrderService::list(db, "alice", PageRequest::orders(Some(2)).unwrap())
        .await
        .unwrap();
    assert_eq!(
        second.iter().map(|o| o.order.id).collect::<Vec<_>>(),
        vec![ids[1], ids[0]]
    );

    let (past_end, _) = OrderService::list(db, "alice", PageRequest::orders(Some(3)).unwrap())
        .await
        .unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_huge_page_numbers_are_empty() {
    let db = &common::setup().await;
    let f = fixture(db).await;
    OrderService::create(db, "alice", vec![ticket(f.session, 1, 1)])
        .await
        .unwrap();

    for page in [1u64 << 62, (1u64 << 63) + 1, u64::MAX] {
        let (orders, total) =
            OrderService::list(db, "alice", PageRequest::orders(Some(page)).unwrap())
                .await
                .unwrap();
        assert!(orders.is_empty(), "page {page} returned orders");
        assert_eq!(total, 1);
    }
}

#[tokio::test]
async fn test_deleting_session_releases_seats() {
    let db = &common::setup().await;
    let f = fixture(db).await;

    let created = OrderService::create(
        db,
        "alice",
        vec![ticket(f.session, 1, 1), ticket(f.other_session, 1, 1)],
    )
    .await
    .unwrap();

    MovieSessionService::delete(db, f.session).await.unwrap();

    let order = OrderService::get(db, "alice", created.order.id).await.unwrap();
    assert_eq!(order.tickets.len(), 1);
    assert_eq!(counts(db).await, (1, 1));
}

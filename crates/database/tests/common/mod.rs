#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use database::{
    entities::{cinema_hall, movie, movie_session},
    services::{
        cinema_hall::CinemaHallService, movie::MovieService,
        movie_session::MovieSessionService,
    },
};
use migration::{Migrator, MigratorTrait};
use models::{
    catalog::CinemaHallInput, movie::MovieInput, movie_session::MovieSessionInput,
    order::TicketRequest,
};
use sea_orm::{Database, DatabaseConnection};

/// Fresh in-memory database with every migration applied
pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub async fn hall(db: &DatabaseConnection, rows: i32, seats_in_row: i32) -> cinema_hall::Model {
    CinemaHallService::create(
        db,
        CinemaHallInput {
            name: Some(format!("Hall {rows}x{seats_in_row}")),
            rows: Some(rows),
            seats_in_row: Some(seats_in_row),
        },
    )
    .await
    .unwrap()
}

pub async fn movie(db: &DatabaseConnection, title: &str) -> movie::Model {
    MovieService::create(
        db,
        MovieInput {
            title: Some(title.to_string()),
            description: Some(format!("About {title}")),
            duration: Some(120),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .movie
}

pub async fn session(
    db: &DatabaseConnection,
    movie_id: i32,
    hall_id: i32,
    show_time: NaiveDateTime,
) -> movie_session::Model {
    MovieSessionService::create(
        db,
        MovieSessionInput {
            show_time: Some(show_time),
            movie: Some(movie_id),
            cinema_hall: Some(hall_id),
        },
    )
    .await
    .unwrap()
}

pub fn ticket(movie_session: i32, row: i32, seat: i32) -> TicketRequest {
    TicketRequest {
        movie_session,
        row,
        seat,
    }
}

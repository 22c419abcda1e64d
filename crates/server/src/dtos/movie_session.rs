use super::catalog::CinemaHallResponse;
use chrono::{NaiveDate, NaiveDateTime};
use database::{
    entities::movie_session,
    services::movie_session::{SessionAvailability, SessionSummary},
};
use models::seat::Seat;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MovieSessionListItem {
    pub id: i32,
    pub show_time: NaiveDateTime,
    pub movie_title: String,
    pub cinema_hall_name: String,
    pub cinema_hall_capacity: i64,
    pub tickets_available: i64,
}

impl From<SessionSummary> for MovieSessionListItem {
    fn from(summary: SessionSummary) -> Self {
        Self {
            id: summary.session.id,
            show_time: summary.session.show_time,
            movie_title: summary.movie_title,
            cinema_hall_name: summary.cinema_hall_name,
            cinema_hall_capacity: summary.capacity,
            tickets_available: summary.tickets_available,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionMovie {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
}

/// Session details with the seats already sold
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieSessionDetail {
    pub id: i32,
    pub show_time: NaiveDateTime,
    pub movie: SessionMovie,
    pub cinema_hall: CinemaHallResponse,
    pub taken_places: Vec<Seat>,
}

impl From<SessionAvailability> for MovieSessionDetail {
    fn from(availability: SessionAvailability) -> Self {
        let SessionAvailability {
            session,
            movie,
            cinema_hall,
            taken_places,
        } = availability;

        Self {
            id: session.id,
            show_time: session.show_time,
            movie: SessionMovie {
                id: movie.movie.id,
                title: movie.movie.title,
                description: movie.movie.description,
                duration: movie.movie.duration,
                genres: movie.genres.into_iter().map(|g| g.name).collect(),
                actors: movie.actors.iter().map(|a| a.full_name()).collect(),
            },
            cinema_hall: cinema_hall.into(),
            taken_places,
        }
    }
}

/// Session as returned from create and update
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieSessionResponse {
    pub id: i32,
    pub show_time: NaiveDateTime,
    /// Movie id
    pub movie: i32,
    /// Cinema hall id
    pub cinema_hall: i32,
}

impl From<movie_session::Model> for MovieSessionResponse {
    fn from(session: movie_session::Model) -> Self {
        Self {
            id: session.id,
            show_time: session.show_time,
            movie: session.movie_id,
            cinema_hall: session.cinema_hall_id,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MovieSessionQueryParams {
    /// Only sessions starting on this date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
    /// Only sessions of this movie id
    pub movie: Option<i32>,
}

use database::entities::{actor, cinema_hall, genre};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    pub id: i32,
    pub name: String,
}

impl From<genre::Model> for GenreResponse {
    fn from(genre: genre::Model) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActorResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl From<actor::Model> for ActorResponse {
    fn from(actor: actor::Model) -> Self {
        Self {
            full_name: actor.full_name(),
            id: actor.id,
            first_name: actor.first_name,
            last_name: actor.last_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CinemaHallResponse {
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    /// rows × seats_in_row
    pub capacity: i64,
}

impl From<cinema_hall::Model> for CinemaHallResponse {
    fn from(hall: cinema_hall::Model) -> Self {
        Self {
            capacity: hall.capacity(),
            id: hall.id,
            name: hall.name,
            rows: hall.rows,
            seats_in_row: hall.seats_in_row,
        }
    }
}

use super::catalog::{ActorResponse, GenreResponse};
use database::services::movie::MovieWithRelations;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Movie as shown in the list view, without its description
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieListItem {
    pub id: i32,
    pub title: String,
    pub duration: i32,
    /// Genre names
    pub genres: Vec<String>,
    /// Actor full names
    pub actors: Vec<String>,
}

impl From<MovieWithRelations> for MovieListItem {
    fn from(data: MovieWithRelations) -> Self {
        Self {
            id: data.movie.id,
            title: data.movie.title,
            duration: data.movie.duration,
            genres: data.genres.into_iter().map(|g| g.name).collect(),
            actors: data.actors.iter().map(|a| a.full_name()).collect(),
        }
    }
}

/// Movie with its genres and actors expanded
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieDetail {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<GenreResponse>,
    pub actors: Vec<ActorResponse>,
}

impl From<MovieWithRelations> for MovieDetail {
    fn from(data: MovieWithRelations) -> Self {
        Self {
            id: data.movie.id,
            title: data.movie.title,
            description: data.movie.description,
            duration: data.movie.duration,
            genres: data.genres.into_iter().map(GenreResponse::from).collect(),
            actors: data.actors.into_iter().map(ActorResponse::from).collect(),
        }
    }
}

/// Movie as returned from create and update, associations as ids
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<i32>,
    pub actors: Vec<i32>,
}

impl From<MovieWithRelations> for MovieResponse {
    fn from(data: MovieWithRelations) -> Self {
        Self {
            id: data.movie.id,
            title: data.movie.title,
            description: data.movie.description,
            duration: data.movie.duration,
            genres: data.genres.iter().map(|g| g.id).collect(),
            actors: data.actors.iter().map(|a| a.id).collect(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MovieQueryParams {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Comma-separated genre ids
    pub genres: Option<String>,
    /// Comma-separated actor ids
    pub actors: Option<String>,
}

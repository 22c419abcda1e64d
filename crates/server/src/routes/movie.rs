use crate::{
    dtos::movie::{MovieDetail, MovieListItem, MovieQueryParams, MovieResponse},
    error::ApiError,
    extractors::{Params, Payload},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::movie::MovieService;
use models::movie::{MovieFilter, MovieInput};

/// List movies, optionally filtered by title, genres or actors
#[utoipa::path(
    get,
    path = "/movies",
    params(MovieQueryParams),
    responses(
        (status = 200, description = "Matching movies", body = [MovieListItem]),
        (status = 400, description = "Malformed id list")
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Params(params): Params<MovieQueryParams>,
) -> Result<Json<Vec<MovieListItem>>, ApiError> {
    let filter = MovieFilter::parse(
        params.title,
        params.genres.as_deref(),
        params.actors.as_deref(),
    )?;

    let movies = MovieService::list(&state.db, &filter).await?;
    Ok(Json(movies.into_iter().map(MovieListItem::from).collect()))
}

/// Get a movie with its genres and actors expanded
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie found", body = MovieDetail),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieDetail>, ApiError> {
    Ok(Json(MovieService::get(&state.db, id).await?.into()))
}

/// Create a movie linked to existing genres and actors
#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieInput,
    responses(
        (status = 201, description = "Movie created", body = MovieResponse),
        (status = 400, description = "Invalid fields or unknown genre/actor ids")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Payload(input): Payload<MovieInput>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let movie = MovieService::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

/// Replace a movie
#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    request_body = MovieInput,
    responses(
        (status = 200, description = "Movie updated", body = MovieResponse),
        (status = 400, description = "Invalid fields or unknown genre/actor ids"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<MovieInput>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = MovieService::update(&state.db, id, input, false).await?;
    Ok(Json(movie.into()))
}

/// Partially update a movie; omitted association lists are left alone
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    request_body = MovieInput,
    responses(
        (status = 200, description = "Movie updated", body = MovieResponse),
        (status = 400, description = "Invalid fields or unknown genre/actor ids"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn patch_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<MovieInput>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = MovieService::update(&state.db, id, input, true).await?;
    Ok(Json(movie.into()))
}

/// Delete a movie along with its sessions and their tickets
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    MovieService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

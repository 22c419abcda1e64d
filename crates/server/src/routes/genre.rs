use crate::{dtos::catalog::GenreResponse, error::ApiError, extractors::Payload, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::genre::GenreService;
use models::catalog::GenreInput;

/// List all genres
#[utoipa::path(
    get,
    path = "/genres",
    responses(
        (status = 200, description = "All genres", body = [GenreResponse])
    ),
    tag = "Genres"
)]
pub async fn list_genres(
    State(state): State<AppState>,
) -> Result<Json<Vec<GenreResponse>>, ApiError> {
    let genres = GenreService::list(&state.db).await?;
    Ok(Json(genres.into_iter().map(GenreResponse::from).collect()))
}

/// Get a genre by ID
#[utoipa::path(
    get,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre found", body = GenreResponse),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GenreResponse>, ApiError> {
    Ok(Json(GenreService::get(&state.db, id).await?.into()))
}

/// Create a genre
#[utoipa::path(
    post,
    path = "/genres",
    request_body = GenreInput,
    responses(
        (status = 201, description = "Genre created", body = GenreResponse),
        (status = 400, description = "Invalid or duplicate name")
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Payload(input): Payload<GenreInput>,
) -> Result<(StatusCode, Json<GenreResponse>), ApiError> {
    let genre = GenreService::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(genre.into())))
}

/// Replace a genre
#[utoipa::path(
    put,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = GenreInput,
    responses(
        (status = 200, description = "Genre updated", body = GenreResponse),
        (status = 400, description = "Invalid or duplicate name"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<GenreInput>,
) -> Result<Json<GenreResponse>, ApiError> {
    let updated = GenreService::update(&state.db, id, input, false).await?;
    Ok(Json(updated.into()))
}

/// Partially update a genre
#[utoipa::path(
    patch,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = GenreInput,
    responses(
        (status = 200, description = "Genre updated", body = GenreResponse),
        (status = 400, description = "Invalid or duplicate name"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn patch_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<GenreInput>,
) -> Result<Json<GenreResponse>, ApiError> {
    let updated = GenreService::update(&state.db, id, input, true).await?;
    Ok(Json(updated.into()))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    GenreService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

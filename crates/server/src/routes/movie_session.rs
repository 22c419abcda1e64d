use crate::{
    dtos::movie_session::{
        MovieSessionDetail, MovieSessionListItem, MovieSessionQueryParams, MovieSessionResponse,
    },
    error::ApiError,
    extractors::{Params, Payload},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::movie_session::MovieSessionService;
use models::movie_session::{MovieSessionFilter, MovieSessionInput};

/// List sessions with remaining ticket counts
#[utoipa::path(
    get,
    path = "/movie_sessions",
    params(MovieSessionQueryParams),
    responses(
        (status = 200, description = "Matching sessions ordered by show time", body = [MovieSessionListItem]),
        (status = 400, description = "Malformed date or movie id")
    ),
    tag = "Movie sessions"
)]
pub async fn list_movie_sessions(
    State(state): State<AppState>,
    Params(params): Params<MovieSessionQueryParams>,
) -> Result<Json<Vec<MovieSessionListItem>>, ApiError> {
    let filter = MovieSessionFilter {
        date: params.date,
        movie: params.movie,
    };

    let sessions = MovieSessionService::list(&state.db, &filter).await?;
    Ok(Json(
        sessions
            .into_iter()
            .map(MovieSessionListItem::from)
            .collect(),
    ))
}

/// Get a session with the seats already taken
#[utoipa::path(
    get,
    path = "/movie_sessions/{id}",
    params(("id" = i32, Path, description = "Movie session ID")),
    responses(
        (status = 200, description = "Session with taken places", body = MovieSessionDetail),
        (status = 404, description = "Movie session not found")
    ),
    tag = "Movie sessions"
)]
pub async fn get_movie_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieSessionDetail>, ApiError> {
    let availability = MovieSessionService::availability(&state.db, id).await?;
    Ok(Json(availability.into()))
}

/// Schedule a session
#[utoipa::path(
    post,
    path = "/movie_sessions",
    request_body = MovieSessionInput,
    responses(
        (status = 201, description = "Movie session created", body = MovieSessionResponse),
        (status = 400, description = "Invalid fields or unknown movie/hall")
    ),
    tag = "Movie sessions"
)]
pub async fn create_movie_session(
    State(state): State<AppState>,
    Payload(input): Payload<MovieSessionInput>,
) -> Result<(StatusCode, Json<MovieSessionResponse>), ApiError> {
    let session = MovieSessionService::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// Replace a session
#[utoipa::path(
    put,
    path = "/movie_sessions/{id}",
    params(("id" = i32, Path, description = "Movie session ID")),
    request_body = MovieSessionInput,
    responses(
        (status = 200, description = "Movie session updated", body = MovieSessionResponse),
        (status = 400, description = "Invalid fields or unknown movie/hall"),
        (status = 404, description = "Movie session not found")
    ),
    tag = "Movie sessions"
)]
pub async fn update_movie_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<MovieSessionInput>,
) -> Result<Json<MovieSessionResponse>, ApiError> {
    let session = MovieSessionService::update(&state.db, id, input, false).await?;
    Ok(Json(session.into()))
}

/// Partially update a session
#[utoipa::path(
    patch,
    path = "/movie_sessions/{id}",
    params(("id" = i32, Path, description = "Movie session ID")),
    request_body = MovieSessionInput,
    responses(
        (status = 200, description = "Movie session updated", body = MovieSessionResponse),
        (status = 400, description = "Invalid fields or unknown movie/hall"),
        (status = 404, description = "Movie session not found")
    ),
    tag = "Movie sessions"
)]
pub async fn patch_movie_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<MovieSessionInput>,
) -> Result<Json<MovieSessionResponse>, ApiError> {
    let session = MovieSessionService::update(&state.db, id, input, true).await?;
    Ok(Json(session.into()))
}

/// Cancel a session; its tickets go with it
#[utoipa::path(
    delete,
    path = "/movie_sessions/{id}",
    params(("id" = i32, Path, description = "Movie session ID")),
    responses(
        (status = 204, description = "Movie session deleted"),
        (status = 404, description = "Movie session not found")
    ),
    tag = "Movie sessions"
)]
pub async fn delete_movie_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    MovieSessionService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

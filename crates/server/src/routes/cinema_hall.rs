use crate::{
    dtos::catalog::CinemaHallResponse, error::ApiError, extractors::Payload, state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::cinema_hall::CinemaHallService;
use models::catalog::CinemaHallInput;

/// List all cinema halls
#[utoipa::path(
    get,
    path = "/cinema_halls",
    responses(
        (status = 200, description = "All cinema halls", body = [CinemaHallResponse])
    ),
    tag = "Cinema halls"
)]
pub async fn list_cinema_halls(
    State(state): State<AppState>,
) -> Result<Json<Vec<CinemaHallResponse>>, ApiError> {
    let halls = CinemaHallService::list(&state.db).await?;
    Ok(Json(halls.into_iter().map(CinemaHallResponse::from).collect()))
}

/// Get a cinema hall by ID
#[utoipa::path(
    get,
    path = "/cinema_halls/{id}",
    params(("id" = i32, Path, description = "Cinema hall ID")),
    responses(
        (status = 200, description = "Cinema hall found", body = CinemaHallResponse),
        (status = 404, description = "Cinema hall not found")
    ),
    tag = "Cinema halls"
)]
pub async fn get_cinema_hall(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CinemaHallResponse>, ApiError> {
    Ok(Json(CinemaHallService::get(&state.db, id).await?.into()))
}

/// Create a cinema hall
#[utoipa::path(
    post,
    path = "/cinema_halls",
    request_body = CinemaHallInput,
    responses(
        (status = 201, description = "Cinema hall created", body = CinemaHallResponse),
        (status = 400, description = "Invalid hall dimensions or name")
    ),
    tag = "Cinema halls"
)]
pub async fn create_cinema_hall(
    State(state): State<AppState>,
    Payload(input): Payload<CinemaHallInput>,
) -> Result<(StatusCode, Json<CinemaHallResponse>), ApiError> {
    let hall = CinemaHallService::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(hall.into())))
}

/// Replace a cinema hall
#[utoipa::path(
    put,
    path = "/cinema_halls/{id}",
    params(("id" = i32, Path, description = "Cinema hall ID")),
    request_body = CinemaHallInput,
    responses(
        (status = 200, description = "Cinema hall updated", body = CinemaHallResponse),
        (status = 400, description = "Invalid hall dimensions or name"),
        (status = 404, description = "Cinema hall not found")
    ),
    tag = "Cinema halls"
)]
pub async fn update_cinema_hall(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<CinemaHallInput>,
) -> Result<Json<CinemaHallResponse>, ApiError> {
    let updated = CinemaHallService::update(&state.db, id, input, false).await?;
    Ok(Json(updated.into()))
}

/// Partially update a cinema hall
#[utoipa::path(
    patch,
    path = "/cinema_halls/{id}",
    params(("id" = i32, Path, description = "Cinema hall ID")),
    request_body = CinemaHallInput,
    responses(
        (status = 200, description = "Cinema hall updated", body = CinemaHallResponse),
        (status = 400, description = "Invalid hall dimensions or name"),
        (status = 404, description = "Cinema hall not found")
    ),
    tag = "Cinema halls"
)]
pub async fn patch_cinema_hall(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<CinemaHallInput>,
) -> Result<Json<CinemaHallResponse>, ApiError> {
    let updated = CinemaHallService::update(&state.db, id, input, true).await?;
    Ok(Json(updated.into()))
}

/// Delete a cinema hall
#[utoipa::path(
    delete,
    path = "/cinema_halls/{id}",
    params(("id" = i32, Path, description = "Cinema hall ID")),
    responses(
        (status = 204, description = "Cinema hall deleted"),
        (status = 404, description = "Cinema hall not found")
    ),
    tag = "Cinema halls"
)]
pub async fn delete_cinema_hall(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    CinemaHallService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

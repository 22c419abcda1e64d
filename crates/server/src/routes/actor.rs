use crate::{dtos::catalog::ActorResponse, error::ApiError, extractors::Payload, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::actor::ActorService;
use models::catalog::ActorInput;

/// List all actors
#[utoipa::path(
    get,
    path = "/actors",
    responses(
        (status = 200, description = "All actors", body = [ActorResponse])
    ),
    tag = "Actors"
)]
pub async fn list_actors(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActorResponse>>, ApiError> {
    let actors = ActorService::list(&state.db).await?;
    Ok(Json(actors.into_iter().map(ActorResponse::from).collect()))
}

/// Get an actor by ID
#[utoipa::path(
    get,
    path = "/actors/{id}",
    params(("id" = i32, Path, description = "Actor ID")),
    responses(
        (status = 200, description = "Actor found", body = ActorResponse),
        (status = 404, description = "Actor not found")
    ),
    tag = "Actors"
)]
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ActorResponse>, ApiError> {
    Ok(Json(ActorService::get(&state.db, id).await?.into()))
}

/// Create an actor
#[utoipa::path(
    post,
    path = "/actors",
    request_body = ActorInput,
    responses(
        (status = 201, description = "Actor created", body = ActorResponse),
        (status = 400, description = "Invalid actor data")
    ),
    tag = "Actors"
)]
pub async fn create_actor(
    State(state): State<AppState>,
    Payload(input): Payload<ActorInput>,
) -> Result<(StatusCode, Json<ActorResponse>), ApiError> {
    let actor = ActorService::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(actor.into())))
}

/// Replace an actor
#[utoipa::path(
    put,
    path = "/actors/{id}",
    params(("id" = i32, Path, description = "Actor ID")),
    request_body = ActorInput,
    responses(
        (status = 200, description = "Actor updated", body = ActorResponse),
        (status = 400, description = "Invalid actor data"),
        (status = 404, description = "Actor not found")
    ),
    tag = "Actors"
)]
pub async fn update_actor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<ActorInput>,
) -> Result<Json<ActorResponse>, ApiError> {
    let updated = ActorService::update(&state.db, id, input, false).await?;
    Ok(Json(updated.into()))
}

/// Partially update an actor
#[utoipa::path(
    patch,
    path = "/actors/{id}",
    params(("id" = i32, Path, description = "Actor ID")),
    request_body = ActorInput,
    responses(
        (status = 200, description = "Actor updated", body = ActorResponse),
        (status = 400, description = "Invalid actor data"),
        (status = 404, description = "Actor not found")
    ),
    tag = "Actors"
)]
pub async fn patch_actor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Payload(input): Payload<ActorInput>,
) -> Result<Json<ActorResponse>, ApiError> {
    let updated = ActorService::update(&state.db, id, input, true).await?;
    Ok(Json(updated.into()))
}

/// Delete an actor
#[utoipa::path(
    delete,
    path = "/actors/{id}",
    params(("id" = i32, Path, description = "Actor ID")),
    responses(
        (status = 204, description = "Actor deleted"),
        (status = 404, description = "Actor not found")
    ),
    tag = "Actors"
)]
pub async fn delete_actor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    ActorService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

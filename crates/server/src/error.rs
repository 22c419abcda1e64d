use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::services::ServiceError;
use log::error;
use models::validation::FieldErrors;
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with, mapped onto an HTTP response
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Request could not be decoded or failed checks outside the services
    #[error("bad request: {0}")]
    BadRequest(FieldErrors),

    #[error("authentication credentials were not provided")]
    Unauthenticated,
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::BadRequest(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Seat conflicts share the validation status and body shape
            Self::BadRequest(errors)
            | Self::Service(ServiceError::Validation(errors))
            | Self::Service(ServiceError::Conflict(errors)) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            Self::Service(ServiceError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Not found." })),
            )
                .into_response(),
            Self::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Authentication credentials were not provided." })),
            )
                .into_response(),
            Self::Service(ServiceError::Database(err)) => {
                error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal server error." })),
                )
                    .into_response()
            }
        }
    }
}

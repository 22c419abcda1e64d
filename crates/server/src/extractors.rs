use crate::error::ApiError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use models::validation::FieldErrors;
use serde::de::DeserializeOwned;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Identity of the authenticated caller
///
/// Populated by [`attach_current_user`] from a validated bearer token. Handlers
/// that take this extractor reject anonymous requests with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(String);

impl CurrentUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(ApiError::Unauthenticated)
    }
}

/// Copies the token subject into a [`CurrentUser`] request extension
pub async fn attach_current_user(mut request: Request, next: Next) -> Response {
    let subject = request
        .extensions()
        .get::<DefaultClaims>()
        .and_then(|claims| claims.sub.clone());

    if let Some(subject) = subject {
        request.extensions_mut().insert(CurrentUser::new(subject));
    }

    next.run(request).await
}

/// JSON body whose decoding failures come back as a 400 field map
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::BadRequest(FieldErrors::single(
                "non_field_errors",
                rejection.body_text(),
            ))
        })?;

        Ok(Self(value))
    }
}

/// Query string whose decoding failures come back as a 400 field map
pub struct Params<T>(pub T);

impl<S, T> FromRequestParts<S> for Params<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::BadRequest(FieldErrors::single(
                    "non_field_errors",
                    rejection.body_text(),
                ))
            })?;

        Ok(Self(value))
    }
}

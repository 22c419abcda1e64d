use models::validation::FieldErrors;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure modes shared by every service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input was malformed or referenced rows that do not exist
    #[error("invalid input: {0}")]
    Validation(FieldErrors),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },

    /// A requested seat is already sold for its session
    #[error("booking conflict: {0}")]
    Conflict(FieldErrors),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    /// Field errors carried by validation and conflict failures
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) | Self::Conflict(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

use crate::validation::FieldErrors;
use serde::Deserialize;

/// Body of a genre create or update request
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenreInput {
    pub name: Option<String>,
}

impl GenreInput {
    pub fn validate(&self, partial: bool) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check_text("name", self.name.as_deref(), partial);
        errors.into_result()
    }
}

/// Body of an actor create or update request
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ActorInput {
    pub fn validate(&self, partial: bool) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check_text("first_name", self.first_name.as_deref(), partial);
        errors.check_text("last_name", self.last_name.as_deref(), partial);
        errors.into_result()
    }
}

/// Body of a cinema hall create or update request
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CinemaHallInput {
    pub name: Option<String>,
    pub rows: Option<i32>,
    pub seats_in_row: Option<i32>,
}

impl CinemaHallInput {
    pub fn validate(&self, partial: bool) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check_text("name", self.name.as_deref(), partial);
        errors.check_positive("rows", self.rows, partial);
        errors.check_positive("seats_in_row", self.seats_in_row, partial);
        errors.into_result()
    }
}

/// Display name for an actor
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

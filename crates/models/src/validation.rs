use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
};

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const NOT_POSITIVE: &str = "Ensure this value is greater than 0.";

/// Validation failures keyed by the offending field
///
/// Serializes as `{"field": ["message", ...]}`. Nested fields use dotted
/// paths such as `tickets.0.seat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for an error map holding exactly one message
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Records a missing value unless the caller is performing a partial update
    pub fn check_required<T: ?Sized>(&mut self, field: &str, value: Option<&T>, partial: bool) {
        if value.is_none() && !partial {
            self.add(field, REQUIRED);
        }
    }

    /// Required (unless partial) and non-blank when present
    pub fn check_text(&mut self, field: &str, value: Option<&str>, partial: bool) {
        match value {
            Some(text) if text.trim().is_empty() => self.add(field, BLANK),
            Some(_) => {}
            None => self.check_required::<str>(field, None, partial),
        }
    }

    /// Required (unless partial) and strictly positive when present
    pub fn check_positive(&mut self, field: &str, value: Option<i32>, partial: bool) {
        match value {
            Some(n) if n <= 0 => self.add(field, NOT_POSITIVE),
            Some(_) => {}
            None => self.check_required::<i32>(field, None, partial),
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Message used when a referenced row does not exist
pub fn missing_reference(id: i32) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

/// Parses a comma-separated list of integer ids such as `1,2,3`
pub fn parse_id_list(field: &str, raw: &str) -> Result<Vec<i32>, FieldErrors> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>().map_err(|_| {
                FieldErrors::single(field, format!("\"{part}\" is not a valid integer id."))
            })
        })
        .collect()
}

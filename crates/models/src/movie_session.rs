use crate::validation::FieldErrors;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

/// Body of a movie session create or update request
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MovieSessionInput {
    pub show_time: Option<NaiveDateTime>,
    /// Movie id
    pub movie: Option<i32>,
    /// Cinema hall id
    pub cinema_hall: Option<i32>,
}

impl MovieSessionInput {
    pub fn validate(&self, partial: bool) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check_required("show_time", self.show_time.as_ref(), partial);
        errors.check_required("movie", self.movie.as_ref(), partial);
        errors.check_required("cinema_hall", self.cinema_hall.as_ref(), partial);
        errors.into_result()
    }
}

/// Optional filters for the session list, combined with AND
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieSessionFilter {
    /// Calendar date of `show_time`
    pub date: Option<NaiveDate>,
    pub movie: Option<i32>,
}

impl MovieSessionFilter {
    /// Half-open `[start, end)` range covering the filtered date
    ///
    /// `end` is `None` for the last representable date, which has no successor.
    pub fn day_bounds(&self) -> Option<(NaiveDateTime, Option<NaiveDateTime>)> {
        let date = self.date?;
        let start = date.and_time(NaiveTime::MIN);
        let end = date.succ_opt().map(|next| next.and_time(NaiveTime::MIN));
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_requires_all_fields() {
        let err = MovieSessionInput::default().validate(false).unwrap_err();
        assert!(err.contains("show_time"));
        assert!(err.contains("movie"));
        assert!(err.contains("cinema_hall"));
        assert!(MovieSessionInput::default().validate(true).is_ok());
    }

    #[test]
    fn test_day_bounds() {
        let filter = MovieSessionFilter {
            date: NaiveDate::from_ymd_opt(2024, 5, 1),
            movie: None,
        };
        let (start, end) = filter.day_bounds().unwrap();
        assert_eq!(start.to_string(), "2024-05-01 00:00:00");
        assert_eq!(end.unwrap().to_string(), "2024-05-02 00:00:00");

        assert!(MovieSessionFilter::default().day_bounds().is_none());
    }

    #[test]
    fn test_day_bounds_on_last_date() {
        let filter = MovieSessionFilter {
            date: Some(NaiveDate::MAX),
            movie: None,
        };
        let (start, end) = filter.day_bounds().unwrap();
        assert_eq!(start.date(), NaiveDate::MAX);
        assert!(end.is_none());
    }
}

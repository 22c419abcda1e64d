use crate::validation::{FieldErrors, parse_id_list};
use serde::Deserialize;

/// Body of a movie create or update request
///
/// `genres` and `actors` replace the existing associations when present.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MovieInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub genres: Option<Vec<i32>>,
    pub actors: Option<Vec<i32>>,
}

impl MovieInput {
    pub fn validate(&self, partial: bool) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check_text("title", self.title.as_deref(), partial);
        errors.check_text("description", self.description.as_deref(), partial);
        errors.check_positive("duration", self.duration, partial);
        errors.into_result()
    }
}

/// Optional filters for the movie list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    /// Substring of the title
    pub title: Option<String>,
    /// Matches movies having any of these genres
    pub genres: Vec<i32>,
    /// Matches movies featuring any of these actors
    pub actors: Vec<i32>,
}

impl MovieFilter {
    /// Builds a filter from raw query-string values, ids given as `1,2,3`
    pub fn parse(
        title: Option<String>,
        genres: Option<&str>,
        actors: Option<&str>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let genres = match genres.map(|raw| parse_id_list("genres", raw)).transpose() {
            Ok(ids) => ids.unwrap_or_default(),
            Err(e) => {
                errors.merge(e);
                Vec::new()
            }
        };
        let actors = match actors.map(|raw| parse_id_list("actors", raw)).transpose() {
            Ok(ids) => ids.unwrap_or_default(),
            Err(e) => {
                errors.merge(e);
                Vec::new()
            }
        };

        errors.into_result()?;

        Ok(Self {
            title: title.filter(|t| !t.is_empty()),
            genres,
            actors,
        })
    }

    /// Lowercased `LIKE` pattern matching the title as a plain substring
    pub fn title_pattern(&self) -> Option<String> {
        let title = self.title.as_deref()?;
        let mut pattern = String::with_capacity(title.len() + 2);
        pattern.push('%');
        for c in title.to_lowercase().chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        Some(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_validation() {
        let input = MovieInput {
            title: Some("Inception".to_string()),
            description: Some("Dreams".to_string()),
            duration: Some(0),
            ..Default::default()
        };
        let err = input.validate(false).unwrap_err();
        assert!(err.contains("duration"));
        assert!(!err.contains("genres"));
    }

    #[test]
    fn test_filter_parse() {
        let filter = MovieFilter::parse(Some("star".to_string()), Some("1,2"), None).unwrap();
        assert_eq!(filter.title.as_deref(), Some("star"));
        assert_eq!(filter.genres, vec![1, 2]);
        assert!(filter.actors.is_empty());

        let filter = MovieFilter::parse(Some(String::new()), None, None).unwrap();
        assert_eq!(filter, MovieFilter::default());
    }

    #[test]
    fn test_title_pattern_escapes_wildcards() {
        let filter = MovieFilter {
            title: Some("100%_Pure\\Fun".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filter.title_pattern().as_deref(),
            Some(r"%100\%\_pure\\fun%")
        );
        assert!(MovieFilter::default().title_pattern().is_none());
    }

    #[test]
    fn test_filter_rejects_bad_ids() {
        let err = MovieFilter::parse(None, Some("a"), Some("2,b")).unwrap_err();
        assert!(err.contains("genres"));
        assert!(err.contains("actors"));
    }
}

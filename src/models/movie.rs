use serde::{Deserialize, Serialize};

/// A single catalog row
///
/// Immutable once loaded. `genre` keeps the raw comma-delimited field because
/// genre matching works on the raw text, while `genres` holds the split and
/// trimmed values used for the genre index. `released` is the year cell as
/// written, kept for display when it is not a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub release_year: Option<i32>,
    pub released: String,
    pub genre: String,
    pub genres: Vec<String>,
    pub rating: f64,
    pub overview: String,
}

impl MovieRecord {
    /// Creates a record, deriving `genres` from the raw genre field
    pub fn new(
        title: impl Into<String>,
        release_year: Option<i32>,
        genre: impl Into<String>,
        rating: f64,
        overview: impl Into<String>,
    ) -> Self {
        let genre = genre.into();
        let genres = split_genres(&genre);
        Self {
            title: title.into(),
            release_year,
            released: release_year.map(|y| y.to_string()).unwrap_or_default(),
            genre,
            genres,
            rating,
            overview: overview.into(),
        }
    }

    /// Overrides the displayed release value with the raw catalog cell
    pub fn with_released(mut self, released: impl Into<String>) -> Self {
        self.released = released.into();
        self
    }

    /// Case-insensitive substring match against the raw genre field
    ///
    /// "Dra" matches "Drama", and "action" matches "Action, Adventure".
    /// An empty query matches nothing.
    pub fn matches_genre(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        self.genre.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Splits a comma-delimited genre field into trimmed values
///
/// Never returns an empty list: an empty field yields a single empty genre.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',').map(|g| g.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(genre: &str) -> MovieRecord {
        MovieRecord::new("The Godfather", Some(1972), genre, 9.2, "")
    }

    #[test]
    fn test_split_genres_trims_whitespace() {
        assert_eq!(
            split_genres("Crime,  Drama , Thriller"),
            vec!["Crime", "Drama", "Thriller"]
        );
    }

    #[test]
    fn test_split_genres_empty_field() {
        assert_eq!(split_genres(""), vec![""]);
    }

    #[test]
    fn test_new_derives_genres() {
        let record = movie("Action, Adventure");
        assert_eq!(record.genre, "Action, Adventure");
        assert_eq!(record.genres, vec!["Action", "Adventure"]);
    }

    #[test]
    fn test_released_defaults_to_year() {
        assert_eq!(movie("Drama").released, "1972");
        let unknown = MovieRecord::new("Apollo 13", None, "Drama", 7.6, "");
        assert_eq!(unknown.released, "");
    }

    #[test]
    fn test_with_released_keeps_raw_value() {
        let record = MovieRecord::new("Apollo 13", None, "Drama", 7.6, "").with_released("PG");
        assert_eq!(record.release_year, None);
        assert_eq!(record.released, "PG");
    }

    #[test]
    fn test_matches_genre_case_insensitive() {
        let record = movie("Action, Adventure");
        assert!(record.matches_genre("action"));
        assert!(record.matches_genre("ADVENTURE"));
        assert!(!record.matches_genre("Drama"));
    }

    #[test]
    fn test_matches_genre_substring() {
        let record = movie("Drama");
        assert!(record.matches_genre("Dra"));
        assert!(record.matches_genre("ram"));
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(!movie("Drama").matches_genre(""));
        assert!(!movie("").matches_genre(""));
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{Mood, MovieRecord};

/// Request body for the recommendations endpoint
///
/// `mood` stays a string so an unknown value can be reported as invalid input
/// instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub genre: String,
    pub mood: String,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub min_rating: f64,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Parses a minimum rating from free-form input, falling back to 0
///
/// Non-finite values count as unparseable.
pub fn parse_min_rating(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .unwrap_or(0.0)
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let rating = match value {
        Value::Number(n) => n.as_f64().filter(|r| r.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_min_rating(&s),
        _ => 0.0,
    };
    Ok(rating)
}

/// A recommended movie as shown to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub title: String,
    pub release_year: Option<i32>,
    pub released: String,
    pub rating: f64,
    pub genres: Vec<String>,
    pub overview: String,
}

impl From<&MovieRecord> for MovieSummary {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            title: movie.title.clone(),
            release_year: movie.release_year,
            released: movie.released.clone(),
            rating: movie.rating,
            genres: movie.genres.clone(),
            overview: movie.overview.clone(),
        }
    }
}

/// Response for the recommendations endpoint
///
/// An empty `movies` list is a valid outcome; `message` then says which stage
/// left nothing over.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub genre: String,
    pub mood: Mood,
    pub min_rating: f64,
    pub count: usize,
    pub movies: Vec<MovieSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub mod catalog;
pub mod movie;
pub mod recommendation;
pub mod sentiment;

pub use catalog::{Catalog, GenreIndex};
pub use movie::MovieRecord;
pub use recommendation::{
    parse_min_rating, MovieSummary, RecommendationRequest, RecommendationResponse,
};
pub use sentiment::{Mood, Sentiment};

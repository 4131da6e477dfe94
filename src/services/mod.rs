pub mod recommendations;
pub mod sentiment;

pub use recommendations::{recommend, RecommendationCriteria};
pub use sentiment::{PolarityModel, SentimentClassifier, VaderModel};

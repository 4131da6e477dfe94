use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{error::AppResult, models::Sentiment, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub polarity: f64,
    pub sentiment: Sentiment,
    pub model: &'static str,
}

/// Handler for ad-hoc sentiment classification of a piece of text
pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<SentimentRequest>,
) -> AppResult<Json<SentimentResponse>> {
    let polarity = state.classifier.polarity(&request.text);
    let sentiment = Sentiment::from_polarity(polarity);

    tracing::debug!(polarity, sentiment = %sentiment, "Classified text");

    Ok(Json(SentimentResponse {
        polarity,
        sentiment,
        model: state.classifier.model_name(),
    }))
}

use axum::{extract::State, Extension, Json};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Mood, MovieSummary, RecommendationRequest, RecommendationResponse},
    routes::AppState,
    services::recommendations,
};

const NO_CANDIDATES_MESSAGE: &str = "No movies found with those filters.";
const NO_MOOD_MATCH_MESSAGE: &str = "No recommendations matched that mood. Try different filters.";

/// Handler for recommendations endpoint
///
/// Validates genre, mood and limit before running the filter; an empty result
/// is returned as 200 with a message.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let genre = request.genre.trim();
    if !state.genres.contains(genre) {
        return Err(AppError::InvalidInput(format!("Unknown genre '{}'", genre)));
    }

    let mood = request
        .mood
        .parse::<Mood>()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let limit = request.limit.unwrap_or(state.limits.default);
    if limit == 0 || limit > state.limits.max {
        return Err(AppError::InvalidInput(format!(
            "limit must be between 1 and {}",
            state.limits.max
        )));
    }

    tracing::info!(
        request_id = %request_id,
        genre = %genre,
        mood = %mood,
        min_rating = request.min_rating,
        limit,
        "Processing recommendation request"
    );

    let candidates = recommendations::candidates(&state.catalog, genre, request.min_rating);
    let candidate_count = candidates.len();

    let (movies, message) = if candidates.is_empty() {
        (Vec::new(), Some(NO_CANDIDATES_MESSAGE.to_string()))
    } else {
        let mut shuffled = candidates;
        {
            let mut rng = state.rng()?;
            recommendations::shuffle_candidates(&mut shuffled, &mut *rng);
        }
        let picked = recommendations::scan_by_mood(shuffled, &state.classifier, mood, limit);
        let movies: Vec<MovieSummary> = picked.into_iter().map(MovieSummary::from).collect();
        let message = movies
            .is_empty()
            .then(|| NO_MOOD_MATCH_MESSAGE.to_string());
        (movies, message)
    };

    tracing::info!(
        request_id = %request_id,
        candidates = candidate_count,
        recommended = movies.len(),
        "Recommendation completed"
    );

    Ok(Json(RecommendationResponse {
        genre: genre.to_string(),
        mood,
        min_rating: request.min_rating,
        count: movies.len(),
        movies,
        message,
    }))
}

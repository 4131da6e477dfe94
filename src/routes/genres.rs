use axum::{extract::State, Json};
use serde::Serialize;

use crate::{models::GenreIndex, routes::AppState};

#[derive(Debug, Serialize)]
pub struct GenresResponse {
    pub genres: GenreIndex,
}

/// Lists every genre that can be used as a recommendation filter
pub async fn list(State(state): State<AppState>) -> Json<GenresResponse> {
    Json(GenresResponse {
        genres: state.genres.as_ref().clone(),
    })
}

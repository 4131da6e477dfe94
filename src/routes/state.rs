use std::sync::{Arc, Mutex, MutexGuard};

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Catalog, GenreIndex},
    services::SentimentClassifier,
};

/// Bounds applied to a requested recommendation limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationLimits {
    pub default: usize,
    pub max: usize,
}

impl From<&Config> for RecommendationLimits {
    fn from(config: &Config) -> Self {
        Self {
            default: config.default_recommendation_limit,
            max: config.max_recommendation_limit,
        }
    }
}

/// Shared application state
///
/// Catalog, genre index and classifier are read-only after startup. The RNG
/// is the only mutable piece and is locked just for the synchronous filter
/// call.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub genres: Arc<GenreIndex>,
    pub classifier: Arc<SentimentClassifier>,
    pub limits: RecommendationLimits,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        classifier: SentimentClassifier,
        rng: StdRng,
        limits: RecommendationLimits,
    ) -> Self {
        let genres = catalog.genre_index();
        Self {
            catalog: Arc::new(catalog),
            genres: Arc::new(genres),
            classifier: Arc::new(classifier),
            limits,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Builds state from configuration, seeding the RNG from `RNG_SEED` or OS entropy
    pub fn from_config(config: &Config, catalog: Catalog, classifier: SentimentClassifier) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => {
                tracing::info!(seed, "Using fixed RNG seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::new(catalog, classifier, rng, RecommendationLimits::from(config))
    }

    /// Locks the process-wide shuffle RNG
    pub fn rng(&self) -> AppResult<MutexGuard<'_, StdRng>> {
        self.rng
            .lock()
            .map_err(|_| AppError::Internal("RNG lock poisoned".to_string()))
    }
}

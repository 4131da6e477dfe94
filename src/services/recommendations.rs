use rand::{seq::SliceRandom, Rng};

use crate::{
    models::{Catalog, Mood, MovieRecord},
    services::sentiment::SentimentClassifier,
};

/// Cap applied when the caller does not choose one
pub const DEFAULT_LIMIT: usize = 5;

/// Filter parameters for a single recommendation run
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCriteria<'a> {
    pub genre: &'a str,
    pub mood: Mood,
    pub min_rating: f64,
    pub limit: usize,
}

impl<'a> RecommendationCriteria<'a> {
    /// Criteria with the default cap
    pub fn new(genre: &'a str, mood: Mood, min_rating: f64) -> Self {
        Self {
            genre,
            mood,
            min_rating,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Recommends up to `criteria.limit` movies from the catalog
///
/// Pipeline:
/// 1. Genre: case-insensitive substring match on the raw genre field
/// 2. Rating: `rating >= min_rating`
/// 3. Shuffle the survivors with `rng`
/// 4. Classify overviews in shuffled order, keeping mood matches, and stop
///    once the cap is reached
///
/// Results come back in acceptance order. An empty result is a normal
/// outcome, not an error.
pub fn recommend<'c, R>(
    catalog: &'c Catalog,
    classifier: &SentimentClassifier,
    criteria: &RecommendationCriteria<'_>,
    rng: &mut R,
) -> Vec<&'c MovieRecord>
where
    R: Rng + ?Sized,
{
    let candidates = candidates(catalog, criteria.genre, criteria.min_rating);
    if candidates.is_empty() {
        return Vec::new();
    }
    select_by_mood(candidates, classifier, criteria.mood, criteria.limit, rng)
}

/// Genre and rating stages, in catalog order
///
/// Deterministic: the same catalog and parameters always give the same list.
pub fn candidates<'c>(catalog: &'c Catalog, genre: &str, min_rating: f64) -> Vec<&'c MovieRecord> {
    catalog
        .movies()
        .iter()
        .filter(|movie| movie.matches_genre(genre))
        .filter(|movie| movie.rating >= min_rating)
        .collect()
}

/// Shuffle and mood stages with early stop
///
/// Shuffles once, then scans once; the classifier is not called again after
/// `limit` records have been accepted.
pub fn select_by_mood<'c, R>(
    mut candidates: Vec<&'c MovieRecord>,
    classifier: &SentimentClassifier,
    mood: Mood,
    limit: usize,
    rng: &mut R,
) -> Vec<&'c MovieRecord>
where
    R: Rng + ?Sized,
{
    if limit == 0 || candidates.is_empty() {
        return Vec::new();
    }

    shuffle_candidates(&mut candidates, rng);
    scan_by_mood(candidates, classifier, mood, limit)
}

/// Randomization stage on its own, so callers sharing an RNG can release it
/// before the classifier runs
pub fn shuffle_candidates<R>(candidates: &mut [&MovieRecord], rng: &mut R)
where
    R: Rng + ?Sized,
{
    candidates.shuffle(rng);
}

/// Mood stage over an already shuffled sequence, stopping at `limit`
pub fn scan_by_mood<'c>(
    shuffled: Vec<&'c MovieRecord>,
    classifier: &SentimentClassifier,
    mood: Mood,
    limit: usize,
) -> Vec<&'c MovieRecord> {
    if limit == 0 {
        return Vec::new();
    }

    let mut accepted = Vec::with_capacity(limit.min(shuffled.len()));
    let mut scanned = 0usize;
    for movie in shuffled {
        scanned += 1;
        if classifier.classify(&movie.overview) == mood {
            accepted.push(movie);
            if accepted.len() >= limit {
                break;
            }
        }
    }

    tracing::debug!(
        mood = %mood,
        scanned,
        accepted = accepted.len(),
        "Mood stage finished"
    );

    accepted
}

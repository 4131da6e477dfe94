use std::sync::Arc;

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::Sentiment;

/// Source of sentiment polarity scores
///
/// Implementations return a score in [-1.0, 1.0] and must be deterministic
/// for identical text. The classifier only depends on this trait, so the
/// underlying NLP library can be swapped without touching the filter.
#[cfg_attr(test, mockall::automock)]
pub trait PolarityModel: Send + Sync {
    /// Polarity of `text`, in [-1.0, 1.0]
    fn polarity(&self, text: &str) -> f64;

    /// Model name for logging and debugging
    fn name(&self) -> &'static str;
}

/// VADER lexicon model, scored by its normalized compound value
pub struct VaderModel {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Default for VaderModel {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderModel {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl PolarityModel for VaderModel {
    fn polarity(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "vader"
    }
}

/// Maps free text to a sentiment label
#[derive(Clone)]
pub struct SentimentClassifier {
    model: Arc<dyn PolarityModel>,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(VaderModel::new()))
    }
}

impl SentimentClassifier {
    pub fn new(model: Arc<dyn PolarityModel>) -> Self {
        Self { model }
    }

    /// Raw polarity score from the underlying model
    pub fn polarity(&self, text: &str) -> f64 {
        self.model.polarity(text)
    }

    /// Classifies `text`; never fails, empty text is neutral
    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }
}

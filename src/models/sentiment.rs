use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Polarity above this is positive
pub const POSITIVE_THRESHOLD: f64 = 0.25;
/// Polarity below this is negative
pub const NEGATIVE_THRESHOLD: f64 = -0.25;

/// Sentiment label derived from a polarity score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Mood requested by the caller; same label set as the classifier output
pub type Mood = Sentiment;

impl Sentiment {
    /// Thresholds are strict: exactly 0.25 or -0.25 is neutral, and so is NaN.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown mood '{0}', expected positive, negative or neutral")]
pub struct ParseSentimentError(pub String);

impl FromStr for Sentiment {
    type Err = ParseSentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(ParseSentimentError(s.to_string())),
        }
    }
}

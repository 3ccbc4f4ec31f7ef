//! Core type definitions shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Sentiment category derived from the unified 0-1 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Positive => write!(f, "positive"),
        }
    }
}

/// The unit returned to clients and stored in the result cache.
///
/// Immutable once produced; recomputing from the same input yields the
/// same payload, so overwriting a cache entry is always safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub sentiment: Sentiment,
    /// Confidence as an integer percentage, 0-100.
    pub sentiment_score: u8,
    /// Derived star rating, 1-5.
    pub rating: u8,
}

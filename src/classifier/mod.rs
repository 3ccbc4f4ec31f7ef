//! The sentiment classifier boundary.
//!
//! The model itself is an external collaborator with a narrow contract:
//! given UTF-8 text it returns exactly one label with a confidence in
//! [0, 1]. Everything the service needs from it goes through
//! [`SentimentClassifier`], so the pipeline can run against the remote
//! inference endpoint in production and a scripted stand-in under test.

mod remote;

pub use remote::RemoteClassifier;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Label emitted by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// One classification: a label and the model's confidence in it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    /// Confidence in the label, in [0, 1].
    pub score: f64,
}

impl Classification {
    /// Collapse label + confidence into a single 0-1 scalar where 0 is
    /// fully negative and 1 fully positive.
    pub fn unified_score(&self) -> f64 {
        match self.label {
            SentimentLabel::Positive => self.score,
            SentimentLabel::Negative => 1.0 - self.score,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("request to classifier failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classifier endpoint returned HTTP {0}")]
    Status(u16),

    #[error("classifier returned unusable payload: {0}")]
    InvalidResponse(String),

    #[error("classifier call exceeded {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify one text. May fail on malformed input or internal fault;
    /// the pipeline maps any failure to its generic internal signal.
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;

    /// Whether the model backend is ready to serve. Reported by the
    /// health endpoint.
    fn is_loaded(&self) -> bool {
        true
    }
}

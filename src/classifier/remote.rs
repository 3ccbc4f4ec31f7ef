//! HTTP-backed classifier client.

use super::{Classification, ClassifierError, SentimentClassifier};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

/// Client for a sentiment inference endpoint.
///
/// Speaks `POST {base_url}/classify` with `{"text": ...}` and expects
/// `{"label": "POSITIVE"|"NEGATIVE", "score": 0.0-1.0}` back.
pub struct RemoteClassifier {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteClassifier {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(32)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SentimentClassifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let url = format!("{}/classify", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&ClassifyRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Status(status.as_u16()));
        }

        let classification: Classification = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        if !(0.0..=1.0).contains(&classification.score) {
            return Err(ClassifierError::InvalidResponse(format!(
                "score {} outside [0, 1]",
                classification.score
            )));
        }

        Ok(classification)
    }
}

//! Request orchestration.
//!
//! Sequencing per request: rate-check, validate, cache lookup, classify
//! on miss, derive features and rating, store, respond. The classifier
//! call is the only slow step and runs under a deadline with no shared
//! lock held; limiter and cache state are touched strictly outside it.

use crate::analysis::{self, rating};
use crate::cache::{fingerprint, CacheStats, ResultCache};
use crate::classifier::{ClassifierError, SentimentClassifier};
use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::limiter::{FixedWindowLimiter, RateLimitConfig};
use crate::types::Prediction;
use std::sync::Arc;
use std::time::Duration;

pub struct Pipeline {
    classifier: Arc<dyn SentimentClassifier>,
    cache: ResultCache,
    limiter: FixedWindowLimiter,
    max_text_len: usize,
    classifier_timeout: Duration,
}

impl Pipeline {
    pub fn new(config: &ServiceConfig, classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            classifier,
            cache: ResultCache::new(config.cache_ttl, config.cache_max_entries),
            limiter: FixedWindowLimiter::new(RateLimitConfig {
                max_requests: config.rate_limit,
                window: config.rate_window,
            }),
            max_text_len: config.max_text_len,
            classifier_timeout: config.classifier_timeout,
        }
    }

    /// Process one review submission for a client.
    pub async fn predict(&self, client_id: &str, text: &str) -> crate::Result<Prediction> {
        if !self.limiter.check_and_record(client_id) {
            tracing::warn!(client = client_id, "rate limit exceeded");
            return Err(ApiError::RateLimited);
        }

        if text.trim().is_empty() {
            return Err(ApiError::validation("Review text cannot be empty"));
        }
        if text.chars().count() > self.max_text_len {
            return Err(ApiError::validation(format!(
                "Review text too long. Maximum length is {} characters.",
                self.max_text_len
            )));
        }

        let key = fingerprint(text);
        if let Some(cached) = self.cache.get(&key) {
            tracing::info!(fingerprint = %&key[..8], "cache hit");
            return Ok(cached);
        }

        let classification =
            match tokio::time::timeout(self.classifier_timeout, self.classifier.classify(text))
                .await
            {
                Ok(Ok(classification)) => classification,
                Ok(Err(e)) => return Err(ApiError::Classifier(e)),
                Err(_) => {
                    return Err(ApiError::Classifier(ClassifierError::Timeout(
                        self.classifier_timeout,
                    )))
                }
            };

        let score = classification.unified_score();
        let features = analysis::extract(text);
        let prediction = Prediction {
            sentiment: rating::band(score),
            sentiment_score: rating::score_percent(score),
            rating: rating::rate(score, &features),
        };

        self.cache.put(&key, prediction.clone());
        tracing::info!(
            sentiment = %prediction.sentiment,
            rating = prediction.rating,
            "processed review"
        );
        Ok(prediction)
    }

    /// Whether the classifier backend reports itself ready.
    pub fn model_loaded(&self) -> bool {
        self.classifier.is_loaded()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop idle limiter windows; invoked by the periodic sweep task.
    pub fn sweep(&self) {
        self.limiter.cleanup();
        let stats = self.cache.stats();
        tracing::debug!(
            tracked_clients = self.limiter.tracked_clients(),
            cache_entries = self.cache.len(),
            cache_hit_ratio = stats.hit_ratio(),
            "sweep complete"
        );
    }
}

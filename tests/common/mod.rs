//! Shared test doubles for the pipeline and HTTP tests.
#![allow(dead_code)] // each test binary uses a different subset

use async_trait::async_trait;
use sentigrade::classifier::{
    Classification, ClassifierError, SentimentClassifier, SentimentLabel,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Classifier that always returns a fixed result and counts invocations.
pub struct ScriptedClassifier {
    result: Classification,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn new(label: SentimentLabel, score: f64) -> Self {
        Self {
            result: Classification { label, score },
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentClassifier for ScriptedClassifier {
    async fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result)
    }
}

/// Classifier that always fails.
pub struct FailingClassifier;

#[async_trait]
impl SentimentClassifier for FailingClassifier {
    async fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
        Err(ClassifierError::Status(503))
    }
}

/// Classifier that sleeps longer than any test deadline.
pub struct SlowClassifier {
    pub delay: Duration,
}

#[async_trait]
impl SentimentClassifier for SlowClassifier {
    async fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
        tokio::time::sleep(self.delay).await;
        Ok(Classification {
            label: SentimentLabel::Positive,
            score: 0.9,
        })
    }
}

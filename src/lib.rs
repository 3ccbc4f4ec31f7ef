//! # sentigrade
//!
//! A text-sentiment rating service. Clients submit review text over HTTP
//! and receive a sentiment label, a confidence percentage, and a derived
//! 1-5 star rating.
//!
//! The interesting work happens between the HTTP boundary and the model:
//! deterministic cache-key derivation, fixed-window rate limiting,
//! lexical feature extraction, rating derivation, and result caching
//! with expiry. The classifier itself sits behind the
//! [`SentimentClassifier`] trait and is called over HTTP in production.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pipeline`] | Request orchestration: rate-check, validate, cache, classify, rate |
//! | [`classifier`] | Classifier contract and the remote HTTP client |
//! | [`cache`] | Fingerprint derivation and the TTL result cache |
//! | [`limiter`] | Per-client fixed-window rate limiter |
//! | [`analysis`] | Lexical features and the rating engine |
//! | [`server`] | Axum routing, middleware, startup |
//! | [`config`] | Service configuration and env loading |
//! | [`error`] | Error taxonomy and HTTP status mapping |

pub mod analysis;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod error;
pub mod limiter;
pub mod pipeline;
pub mod server;
pub mod types;

pub use classifier::{Classification, RemoteClassifier, SentimentClassifier, SentimentLabel};
pub use config::ServiceConfig;
pub use error::ApiError;
pub use pipeline::Pipeline;
pub use types::{Prediction, Sentiment};

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, ApiError>;

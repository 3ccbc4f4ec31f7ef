//! Service configuration.
//!
//! Defaults: 100 requests per hour per client, one-hour cache expiry,
//! 5000-character input ceiling, listen port 6000. Every knob is
//! overridable through a builder method or a `SENTIGRADE_*` environment
//! variable.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Requests allowed per client per window.
    pub rate_limit: u32,
    /// Fixed rate-limit window duration.
    pub rate_window: Duration,
    /// How long a cached prediction stays servable.
    pub cache_ttl: Duration,
    /// Upper bound on cached predictions before LRU eviction kicks in.
    pub cache_max_entries: usize,
    /// Maximum accepted input length, in characters.
    pub max_text_len: usize,
    /// Socket the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the sentiment inference endpoint.
    pub classifier_url: String,
    /// Deadline for a single classifier call.
    pub classifier_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            rate_limit: 100,
            rate_window: Duration::from_secs(3600),
            cache_ttl: Duration::from_secs(3600),
            cache_max_entries: 10_000,
            max_text_len: 5000,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 6000)),
            classifier_url: "http://127.0.0.1:8080".to_string(),
            classifier_timeout: Duration::from_secs(30),
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate_limit(mut self, limit: u32) -> Self {
        self.rate_limit = limit;
        self
    }

    pub fn with_rate_window(mut self, window: Duration) -> Self {
        self.rate_window = window;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_cache_max_entries(mut self, max_entries: usize) -> Self {
        self.cache_max_entries = max_entries;
        self
    }

    pub fn with_max_text_len(mut self, len: usize) -> Self {
        self.max_text_len = len;
        self
    }

    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_classifier_url(mut self, url: impl Into<String>) -> Self {
        self.classifier_url = url.into();
        self
    }

    pub fn with_classifier_timeout(mut self, timeout: Duration) -> Self {
        self.classifier_timeout = timeout;
        self
    }

    /// Build a config from the environment, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(limit) = env_parse::<u32>("SENTIGRADE_RATE_LIMIT") {
            config.rate_limit = limit;
        }
        if let Some(secs) = env_parse::<u64>("SENTIGRADE_RATE_WINDOW_SECS") {
            config.rate_window = Duration::from_secs(secs);
        }
        if let Some(secs) = env_parse::<u64>("SENTIGRADE_CACHE_TTL_SECS") {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(max) = env_parse::<usize>("SENTIGRADE_CACHE_MAX_ENTRIES") {
            config.cache_max_entries = max;
        }
        if let Some(len) = env_parse::<usize>("SENTIGRADE_MAX_TEXT_LEN") {
            config.max_text_len = len;
        }
        if let Some(addr) = env_parse::<SocketAddr>("SENTIGRADE_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(url) = env::var("SENTIGRADE_CLASSIFIER_URL") {
            config.classifier_url = url;
        }
        if let Some(secs) = env_parse::<u64>("SENTIGRADE_CLASSIFIER_TIMEOUT_SECS") {
            config.classifier_timeout = Duration::from_secs(secs);
        }
        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse::<T>().ok())
}

//! Fixed-window rate limiting.
//!
//! Each client identifier gets a counter tied to a window start. The
//! window resets forward-only once it has elapsed; a client at the limit
//! is rejected without incrementing. State lives behind a single mutex;
//! a concurrent race can under- or over-count by at most one per window,
//! which the service tolerates.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per client within one window.
    pub max_requests: u32,
    /// Fixed window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(3600),
        }
    }
}

#[derive(Debug)]
struct ClientWindow {
    count: u32,
    window_start: Instant,
}

/// In-memory per-client fixed-window limiter.
pub struct FixedWindowLimiter {
    config: RateLimitConfig,
    windows: Mutex<HashMap<String, ClientWindow>>,
}

impl FixedWindowLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Check the client's budget and record the request if allowed.
    ///
    /// Returns `false` when the client is at its limit for the current
    /// window; the rejected request is not counted.
    pub fn check_and_record(&self, client_id: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock();
        let window = windows
            .entry(client_id.to_string())
            .or_insert_with(|| ClientWindow {
                count: 0,
                window_start: now,
            });

        if now.duration_since(window.window_start) > self.config.window {
            window.count = 0;
            window.window_start = now;
        }

        if window.count >= self.config.max_requests {
            return false;
        }

        window.count += 1;
        true
    }

    /// Drop windows that elapsed without further traffic.
    ///
    /// Called periodically so the per-client map does not grow without
    /// bound over the process lifetime.
    pub fn cleanup(&self) {
        let now = Instant::now();
        let mut windows = self.windows.lock();
        windows.retain(|_, w| now.duration_since(w.window_start) <= self.config.window);
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn limiter(max_requests: u32, window: Duration) -> FixedWindowLimiter {
        FixedWindowLimiter::new(RateLimitConfig {
            max_requests,
            window,
        })
    }

    #[test]
    fn allows_up_to_limit_then_rejects() {
        let limiter = limiter(3, Duration::from_secs(60));
        for _ in 0..3 {
            assert!(limiter.check_and_record("10.0.0.1"));
        }
        assert!(!limiter.check_and_record("10.0.0.1"));
        // Still rejected; the failed attempt did not consume budget either way.
        assert!(!limiter.check_and_record("10.0.0.1"));
    }

    #[test]
    fn clients_are_independent() {
        let limiter = limiter(1, Duration::from_secs(60));
        assert!(limiter.check_and_record("10.0.0.1"));
        assert!(!limiter.check_and_record("10.0.0.1"));
        assert!(limiter.check_and_record("10.0.0.2"));
    }

    #[test]
    fn window_reset_restores_budget() {
        let limiter = limiter(1, Duration::from_millis(30));
        assert!(limiter.check_and_record("10.0.0.1"));
        assert!(!limiter.check_and_record("10.0.0.1"));
        thread::sleep(Duration::from_millis(40));
        assert!(limiter.check_and_record("10.0.0.1"));
    }

    #[test]
    fn cleanup_drops_idle_windows() {
        let limiter = limiter(5, Duration::from_millis(20));
        limiter.check_and_record("10.0.0.1");
        limiter.check_and_record("10.0.0.2");
        assert_eq!(limiter.tracked_clients(), 2);
        thread::sleep(Duration::from_millis(30));
        limiter.cleanup();
        assert_eq!(limiter.tracked_clients(), 0);
    }
}

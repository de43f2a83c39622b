//! Sliding-window rate limiting for the chat endpoint.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A sliding-window rate limiter keyed by client id.
///
/// Tracks request timestamps per client; a request is allowed while fewer
/// than `limit` requests fall inside the trailing `window`.
pub struct RateLimiter {
    requests: HashMap<String, Vec<Instant>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        RateLimiter {
            requests: HashMap::new(),
            limit,
            window,
        }
    }

    /// Record a request from `client` if it is within the limit.
    ///
    /// Returns `true` when the request is allowed.
    pub fn allow(&mut self, client: &str) -> bool {
        let now = Instant::now();
        let window_start = now - self.window;

        let timestamps = self.requests.entry(client.to_string()).or_default();
        timestamps.retain(|&timestamp| timestamp > window_start);

        if timestamps.len() < self.limit {
            timestamps.push(now);
            true
        } else {
            false
        }
    }

    /// Drop clients whose windows have fully expired, bounding memory on
    /// long-running processes.
    pub fn prune(&mut self) {
        let window_start = Instant::now() - self.window;
        self.requests
            .retain(|_, timestamps| timestamps.iter().any(|&t| t > window_start));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_allows_requests_within_limit() {
        let mut limiter = RateLimiter::new(5, Duration::from_secs(1));
        for _ in 0..5 {
            assert!(limiter.allow("client1"));
        }
        assert!(!limiter.allow("client1"));
    }

    #[test]
    fn test_clients_are_independent() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(1));
        assert!(limiter.allow("client1"));
        assert!(limiter.allow("client2"));
        assert!(!limiter.allow("client1"));
    }

    #[test]
    fn test_resets_after_window() {
        let mut limiter = RateLimiter::new(2, Duration::from_millis(50));
        assert!(limiter.allow("client3"));
        assert!(limiter.allow("client3"));
        assert!(!limiter.allow("client3"));

        thread::sleep(Duration::from_millis(60));

        assert!(limiter.allow("client3"));
    }

    #[test]
    fn test_prune_drops_expired_clients() {
        let mut limiter = RateLimiter::new(2, Duration::from_millis(10));
        assert!(limiter.allow("client4"));

        thread::sleep(Duration::from_millis(20));
        limiter.prune();

        assert!(limiter.requests.is_empty());
    }
}

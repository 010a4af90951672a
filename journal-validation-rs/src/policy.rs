//! Access and quota predicates
//!
//! Both checks are stateless. Owner ids must come from trusted storage and
//! request counts from the caller's own counters.

use crate::{DEFAULT_RATE_WINDOW_SECS, MAX_REQUESTS_PER_WINDOW};
use std::time::Duration;

/// Returns true iff the requesting user owns the record
pub fn validate_user_permissions(requesting_user_id: &str, owner_user_id: &str) -> bool {
    requesting_user_id == owner_user_id
}

/// Request quota over a time window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_requests: u64,
    pub window: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_requests: MAX_REQUESTS_PER_WINDOW,
            window: Duration::from_secs(DEFAULT_RATE_WINDOW_SECS),
        }
    }
}

impl RateLimitPolicy {
    /// Returns true if another request fits in the current window.
    /// The window is the caller's bookkeeping period; only the count decides.
    pub fn allows(&self, requests_in_window: u64) -> bool {
        let allowed = requests_in_window < self.max_requests;
        if !allowed {
            log::debug!(
                "rate limit reached: {} requests in {}s window",
                requests_in_window,
                self.window.as_secs()
            );
        }
        allowed
    }
}

/// Returns true iff fewer than 100 requests were made in the window
pub fn validate_rate_limit(requests_in_window: u64, window_seconds: u64) -> bool {
    RateLimitPolicy {
        window: Duration::from_secs(window_seconds),
        ..RateLimitPolicy::default()
    }
    .allows(requests_in_window)
}

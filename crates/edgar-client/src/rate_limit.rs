//! Request rate limiting for the EDGAR servers.
//!
//! EDGAR enforces a per-client request ceiling (10 requests per second as
//! of 2022). The tracker is a token bucket: a burst allowance of half the
//! per-second budget, refilled one token per release interval. Releasing
//! into a full bucket while the client is idle is a no-op, not an error.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Default request ceiling, matching EDGAR's published fair-access policy.
pub const DEFAULT_MAX_REQUESTS_PER_SECOND: u32 = 10;

/// A shareable, thread-safe request rate limiter.
///
/// Clone it into every component that talks to EDGAR so they draw from one
/// budget. [`RateLimitTracker::acquire`] blocks the calling thread until a
/// request slot is available.
#[derive(Debug, Clone)]
pub struct RateLimitTracker {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    capacity: u32,
    interval: Duration,
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    tokens: u32,
    last_release: Instant,
}

impl RateLimitTracker {
    /// Create a tracker allowing `max_requests_per_second` requests.
    ///
    /// Values below 1 are clamped to 1. Burst capacity is half the
    /// per-second budget, rounded up.
    #[must_use = "returns a rate limiter"]
    pub fn new(max_requests_per_second: u32) -> Self {
        let rps = max_requests_per_second.max(1);
        let capacity = rps.div_ceil(2);
        Self {
            inner: Arc::new(Inner {
                capacity,
                interval: Duration::from_secs_f64(1.0 / f64::from(rps)),
                state: Mutex::new(State {
                    tokens: capacity,
                    last_release: Instant::now(),
                }),
            }),
        }
    }

    /// Block until a request may be made without exceeding the rate limit.
    pub fn acquire(&self) {
        loop {
            let wait = {
                let mut state = self
                    .inner
                    .state
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                self.refill(&mut state);
                if state.tokens > 0 {
                    state.tokens -= 1;
                    return;
                }
                self.inner
                    .interval
                    .saturating_sub(state.last_release.elapsed())
            };
            // Lock released while sleeping so other threads can refill too.
            std::thread::sleep(wait.max(Duration::from_millis(1)));
        }
    }

    /// Credit tokens for every full release interval elapsed, saturating at
    /// the bucket capacity.
    fn refill(&self, state: &mut State) {
        let elapsed = state.last_release.elapsed();
        let released = (elapsed.as_secs_f64() / self.inner.interval.as_secs_f64()) as u32;
        if released > 0 {
            state.tokens = state.tokens.saturating_add(released).min(self.inner.capacity);
            state.last_release += self.inner.interval * released;
        }
    }
}

impl Default for RateLimitTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_half_the_budget_rounded_up() {
        assert_eq!(RateLimitTracker::new(10).inner.capacity, 5);
        assert_eq!(RateLimitTracker::new(9).inner.capacity, 5);
        assert_eq!(RateLimitTracker::new(1).inner.capacity, 1);
        // Clamped to at least one request per second
        assert_eq!(RateLimitTracker::new(0).inner.capacity, 1);
    }

    #[test]
    fn test_burst_up_to_capacity_is_immediate() {
        let tracker = RateLimitTracker::new(50);
        let start = Instant::now();
        for _ in 0..tracker.inner.capacity {
            tracker.acquire();
        }
        // A burst within capacity should not sit out full release intervals.
        assert!(start.elapsed() < Duration::from_millis(200));
    }

    #[test]
    fn test_acquire_on_empty_bucket_blocks_for_a_release() {
        let tracker = RateLimitTracker::new(50); // 20ms release interval
        {
            let mut state = tracker.inner.state.lock().unwrap();
            state.tokens = 0;
            state.last_release = Instant::now();
        }
        let start = Instant::now();
        tracker.acquire();
        // The bucket was empty, so this acquire had to wait for a release.
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_idle_refill_saturates_at_capacity() {
        let tracker = RateLimitTracker::new(1000);
        std::thread::sleep(Duration::from_millis(50));
        let mut state = tracker.inner.state.lock().unwrap();
        tracker.refill(&mut state);
        // Far more intervals elapsed than the bucket can hold.
        assert_eq!(state.tokens, tracker.inner.capacity);
    }

    #[test]
    fn test_clones_share_one_budget() {
        let tracker = RateLimitTracker::new(50);
        let clone = tracker.clone();
        {
            let mut state = clone.inner.state.lock().unwrap();
            state.tokens = 0;
            state.last_release = Instant::now();
        }
        // Draining through the clone empties the original's bucket too.
        let start = Instant::now();
        tracker.acquire();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}

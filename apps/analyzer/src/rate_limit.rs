//! Coarse fixed-window request limiter.
//!
//! One process-wide counter, no per-client keys. The window resets lazily on the first
//! request after it expires. Only atomics are used; a request racing the reset may be
//! counted in either window.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u64,
    window: Duration,
    epoch: Instant,
    /// Start of the current window, in milliseconds since `epoch`.
    window_start_ms: AtomicU64,
    count: AtomicU64,
}

impl RateLimiter {
    pub fn new(max_requests: u64, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            epoch: Instant::now(),
            window_start_ms: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Counts one request; `false` once the window's budget is spent.
    pub fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    pub fn try_acquire_at(&self, now: Instant) -> bool {
        let now_ms = now.saturating_duration_since(self.epoch).as_millis() as u64;
        let window_ms = self.window.as_millis() as u64;
        let start = self.window_start_ms.load(Ordering::Acquire);

        if now_ms.saturating_sub(start) >= window_ms
            && self
                .window_start_ms
                .compare_exchange(start, now_ms, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
        {
            self.count.store(0, Ordering::Release);
        }

        self.count.fetch_add(1, Ordering::AcqRel) < self.max_requests
    }

    /// Requests counted in the current window.
    pub fn current(&self) -> u64 {
        self.count.load(Ordering::Acquire)
    }
}

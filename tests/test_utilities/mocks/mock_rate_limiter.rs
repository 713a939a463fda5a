use awesome_sbom::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock RateLimiter that counts waits instead of sleeping
#[derive(Default, Clone)]
pub struct MockRateLimiter {
    short_waits: Arc<AtomicUsize>,
    long_waits: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn short_waits(&self) -> usize {
        self.short_waits.load(Ordering::SeqCst)
    }

    pub fn long_waits(&self) -> usize {
        self.long_waits.load(Ordering::SeqCst)
    }
}

impl RateLimiter for MockRateLimiter {
    fn wait_before_next_call(&self) {
        self.short_waits.fetch_add(1, Ordering::SeqCst);
    }

    fn wait_after_failure(&self) {
        self.long_waits.fetch_add(1, Ordering::SeqCst);
    }
}

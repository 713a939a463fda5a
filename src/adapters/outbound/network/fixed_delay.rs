use crate::ports::outbound::RateLimiter;
use std::thread;
use std::time::Duration;

/// Fixed-delay pacing: a short courtesy sleep after every call and a longer
/// one after the remote side rejected a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelayRateLimiter {
    short: Duration,
    long: Duration,
}

impl FixedDelayRateLimiter {
    pub const DEFAULT_SHORT: Duration = Duration::from_secs(5);
    pub const DEFAULT_LONG: Duration = Duration::from_secs(15);

    pub fn new(short: Duration, long: Duration) -> Self {
        Self { short, long }
    }

    pub fn short(&self) -> Duration {
        self.short
    }

    pub fn long(&self) -> Duration {
        self.long
    }
}

impl Default for FixedDelayRateLimiter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SHORT, Self::DEFAULT_LONG)
    }
}

impl RateLimiter for FixedDelayRateLimiter {
    fn wait_before_next_call(&self) {
        thread::sleep(self.short);
    }

    fn wait_after_failure(&self) {
        thread::sleep(self.long);
    }
}

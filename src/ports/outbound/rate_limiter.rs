/// RateLimiter port pacing calls to a rate-limited remote API
///
/// Both methods block the calling thread.
pub trait RateLimiter {
    /// Courtesy delay after every request, whatever its outcome
    fn wait_before_next_call(&self);

    /// Backoff after the remote side rejected a request
    fn wait_after_failure(&self);
}

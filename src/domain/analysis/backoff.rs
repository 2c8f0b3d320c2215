use std::time::Duration;

/// Linear backoff shared by the submit and poll phases
///
/// Submit tries immediately and then waits `wait * k` after its k-th failed
/// attempt (0-based). Poll waits `wait * k` before its k-th check (1-based),
/// so the first status check is never immediate. Submit does not wait after
/// its final failed attempt; the failure is reported right away.
///
/// Delays saturate at `Duration::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Attempts allowed per phase
    pub max_attempts: u32,
    /// Base wait
    pub wait: Duration,
}

impl BackoffPolicy {
    pub fn new(max_attempts: u32, wait: Duration) -> Self {
        Self { max_attempts, wait }
    }

    /// Delay before submit attempt `attempt` (0-indexed)
    pub fn submit_delay(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        self.wait.saturating_mul(attempt - 1)
    }

    /// Delay before poll attempt `attempt` (1-indexed)
    pub fn poll_delay(&self, attempt: u32) -> Duration {
        self.wait.saturating_mul(attempt)
    }

    /// Attempt indices for the submit phase
    pub fn submit_attempts(&self) -> std::ops::Range<u32> {
        0..self.max_attempts
    }

    /// Attempt indices for the poll phase
    pub fn poll_attempts(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.max_attempts
    }
}

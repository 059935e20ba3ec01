use std::time::Duration;

use reqwest_retry::policies::ExponentialBackoff;

// Upper bound for exponential waits; a configured delay above this raises
// the bound rather than being clamped down.
const MAX_RETRY_INTERVAL: Duration = Duration::from_secs(32);

/// Wait strategy between retry attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Backoff {
    /// Wait the configured delay before every attempt.
    #[default]
    Fixed,
    /// Multiply the delay by `base` after every attempt, capped at 32s.
    Exponential {
        /// The backoff exponent base.
        base: u32,
    },
}

/// Retry policy for a single logical call.
///
/// A failed call classified as transient is re-attempted up to `count`
/// additional times, waiting per [`Backoff`] between attempts. Permanent
/// failures never consume retry budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Number of additional attempts after the first failure.
    pub count: u32,
    /// Base wait between attempts.
    pub delay: Duration,
    /// Wait strategy; fixed unless configured otherwise.
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    // Conservative defaults: no retries, no delay.
    fn default() -> Self {
        Self {
            count: 0,
            delay: Duration::ZERO,
            backoff: Backoff::Fixed,
        }
    }
}

impl RetryConfig {
    /// Creates a fixed-delay config.
    pub fn new(count: u32, delay: Duration) -> Self {
        Self {
            count,
            delay,
            backoff: Backoff::Fixed,
        }
    }

    /// Replaces the wait strategy.
    #[must_use]
    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Builds the transport-level retry policy applied by the HTTP
    /// middleware to connect errors, timeouts and 5xx-class statuses.
    ///
    /// A fixed delay is expressed as exponential backoff with base 1 and
    /// equal bounds, so both strategies share one policy type.
    pub(crate) fn policy(&self) -> ExponentialBackoff {
        let (base, max_interval) = match self.backoff {
            Backoff::Fixed => (1, self.delay),
            Backoff::Exponential { base } => (base, self.delay.max(MAX_RETRY_INTERVAL)),
        };

        ExponentialBackoff::builder()
            .retry_bounds(self.delay, max_interval)
            .base(base)
            .build_with_max_retries(self.count)
    }

    /// The wait before re-sending after `past_attempts` failed attempts.
    ///
    /// Used for transient failures reported inside a well-formed response
    /// payload, which the transport middleware cannot see.
    pub fn delay_for(&self, past_attempts: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.delay,
            Backoff::Exponential { base } => {
                let factor = base.checked_pow(past_attempts).unwrap_or(u32::MAX);
                self.delay
                    .saturating_mul(factor)
                    .min(self.delay.max(MAX_RETRY_INTERVAL))
            }
        }
    }
}

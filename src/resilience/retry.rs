//! Retry execution.
//!
//! # Responsibilities
//! - Re-invoke a fallible async operation until success or exhaustion
//! - Suspend cooperatively between attempts (exponential backoff)
//! - Surface the error from the last failed attempt, unchanged
//!
//! # Design Decisions
//! - The operation receives the zero-based attempt index
//! - Retries are uniform; callers wanting fail-fast on permanent errors
//!   inspect the classified category before calling again
//! - Suspension uses `tokio::time::sleep`, so concurrent calls never block
//!   each other; dropping the returned future cancels between attempts

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::resilience::backoff::backoff_delay;

/// Options for a single retry execution.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryOptions {
    /// Maximum retries after the initial attempt (`retries = 2` allows up to
    /// 3 attempts total).
    pub retries: u32,

    /// Backoff growth factor per attempt.
    pub factor: f64,

    /// Delay before the first retry.
    pub min_delay: Duration,

    /// Hard ceiling on any single delay.
    pub max_delay: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            retries: 2,
            factor: 2.0,
            min_delay: Duration::from_millis(400),
            max_delay: Duration::from_millis(4000),
        }
    }
}

/// Execute `operation` with retries and exponential backoff.
///
/// `operation(0)` runs immediately; a success returns at once with no delay.
/// After a failure at attempt `k` with retries remaining, execution suspends
/// for `min(max_delay, min_delay * factor^k)` and then `operation(k + 1)`
/// runs. On exhaustion the error from the last attempt is returned.
pub async fn retry_async<T, E, F, Fut>(mut operation: F, options: &RetryOptions) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt: u32 = 0;

    loop {
        match operation(attempt).await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(attempt, "operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(error) => {
                if attempt >= options.retries {
                    warn!(attempts = attempt + 1, "operation failed, retries exhausted");
                    return Err(error);
                }

                let delay =
                    backoff_delay(attempt, options.factor, options.min_delay, options.max_delay);
                debug!(attempt, delay_ms = delay.as_millis() as u64, "operation failed, backing off");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

//! Exponential backoff delay calculation.

use std::time::Duration;

/// Delay before the retry that follows failed attempt `attempt` (zero-based).
///
/// Computes `min_delay * factor^attempt`, clamped to `max_delay`. The cap is
/// a hard ceiling: it also applies when the exponential term overflows the
/// representable range. Deterministic — the schedule is part of the contract.
pub fn backoff_delay(attempt: u32, factor: f64, min_delay: Duration, max_delay: Duration) -> Duration {
    let raw = min_delay.as_millis() as f64 * factor.powf(f64::from(attempt));
    let max_ms = max_delay.as_millis() as u64;

    if raw.is_finite() && raw < max_ms as f64 {
        Duration::from_millis(raw as u64)
    } else {
        max_delay
    }
}

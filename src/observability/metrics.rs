//! Metrics collection.
//!
//! # Metrics
//! - `client_requests_total` (counter): function invocations started, by function
//! - `client_retries_total` (counter): retry attempts, by function
//! - `client_exhausted_total` (counter): invocations that failed after all
//!   attempts, by function
//!
//! # Design Decisions
//! - Records through the `metrics` facade only; the embedding application
//!   installs whatever recorder/exporter it wants
//! - Labelled by function name, nothing higher-cardinality

use metrics::counter;

/// Record the start of a function invocation.
pub fn record_request(function: &str) {
    counter!("client_requests_total", "function" => function.to_string()).increment(1);
}

/// Record a retry attempt.
pub fn record_retry(function: &str) {
    counter!("client_retries_total", "function" => function.to_string()).increment(1);
}

/// Record an invocation that failed after exhausting its attempts.
pub fn record_exhausted(function: &str) {
    counter!("client_exhausted_total", "function" => function.to_string()).increment(1);
}

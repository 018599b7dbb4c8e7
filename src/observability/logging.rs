//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries
//! - Respect `RUST_LOG` when set, fall back to a sensible default filter
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging; log lines carry fields,
//!   not formatted strings
//! - The library itself never installs a subscriber; only binaries do

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is not set, e.g.
/// `"platform_client=info"`.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

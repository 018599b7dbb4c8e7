//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client / resilience produce:
//!     → tracing events (structured fields, request IDs)
//!     → metrics counters (requests, retries, exhaustion)
//!
//! binaries consume:
//!     → logging.rs (subscriber init, RUST_LOG filter)
//!     → metrics recorder installed by the embedder
//! ```

pub mod logging;
pub mod metrics;

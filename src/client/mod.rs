//! Remote invocation subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → functions.rs (resolve URL, attach auth headers + request ID)
//!     → resilience (retry with backoff around each attempt)
//!     → backend response (JSON) or ClientError surfaced to the caller
//! ```
//!
//! # Design Decisions
//! - Retries are uniform across failure kinds; a caller that wants to fail
//!   fast on permanent errors classifies the result first
//! - Non-success responses keep the backend's body text so the classifier
//!   can recognize it

pub mod functions;

pub use functions::FunctionsClient;

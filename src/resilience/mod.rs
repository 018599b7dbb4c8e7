//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Remote call:
//!     → retry.rs (invoke operation with zero-based attempt index)
//!     → On failure: backoff.rs (compute capped exponential delay, suspend)
//!     → On exhaustion: last attempt's error surfaces to the caller
//! ```
//!
//! # Design Decisions
//! - Backoff is deterministic; the delay schedule is part of the contract
//! - Each execution's state is local to its future; concurrent calls share
//!   nothing and need no coordination
//! - No timeout wraps the operation itself, only the inter-attempt delay is
//!   time-bounded

pub mod backoff;
pub mod retry;

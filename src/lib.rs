//! Resilient Backend Platform Client
//!
//! Client-side plumbing for talking to a managed backend platform
//! (authentication, REST data API, on-demand edge functions).
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────────┐
//!                   │                PLATFORM CLIENT                    │
//!                   │                                                   │
//!   BASE_URL /      │  ┌─────────┐    ┌───────────┐    ┌────────────┐  │
//!   ANON_KEY ───────┼─▶│ config  │───▶│ endpoints │───▶│   client   │  │
//!   / TOML file     │  │ loader  │    │ resolver  │    │ (functions)│  │
//!                   │  └─────────┘    └───────────┘    └─────┬──────┘  │
//!                   │                                        │         │
//!                   │                                        ▼         │
//!                   │                                ┌────────────┐    │     Edge
//!                   │                                │ resilience │────┼───▶ function
//!                   │                                │ (backoff + │    │     endpoint
//!                   │                                │   retry)   │    │
//!                   │                                └─────┬──────┘    │
//!                   │                                      │           │
//!   Localized       │  ┌──────────┐                        │           │
//!   message ◀───────┼──│  errors  │◀───────────────────────┘           │
//!                   │  │ classify │     (final failure)                │
//!                   │  └──────────┘                                    │
//!                   │                                                   │
//!                   │  ┌────────────────────────────────────────────┐  │
//!                   │  │          Cross-Cutting Concerns             │  │
//!                   │  │   ┌─────────────┐      ┌───────────────┐    │  │
//!                   │  │   │   logging   │      │    metrics    │    │  │
//!                   │  │   └─────────────┘      └───────────────┘    │  │
//!                   │  └────────────────────────────────────────────┘  │
//!                   └──────────────────────────────────────────────────┘
//! ```
//!
//! The three core pieces — retry, error translation, endpoint resolution —
//! are independent; they compose only through the caller, and
//! [`client::FunctionsClient`] is the in-crate caller wiring them together.

// Core subsystems
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod resilience;

// Remote invocation
pub mod client;

// Cross-cutting concerns
pub mod observability;

pub use client::FunctionsClient;
pub use config::ServiceConfig;
pub use errors::classify::ErrorCategory;
pub use errors::ClientError;
pub use resilience::retry::{retry_async, RetryOptions};

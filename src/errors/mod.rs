//! Error types and user-facing translation.
//!
//! [`ClientError`] is the crate's failure type; its `Display` texts are what
//! [`classify`] matches on, so backend-produced messages pass through
//! verbatim and the crate's own failures carry classifier-recognized
//! prefixes.

pub mod classify;

use thiserror::Error;

pub use classify::{translate, translate_opt, ErrorCategory};

/// Errors produced by the platform client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client cannot operate without a base URL and public key.
    #[error("Missing backend configuration: {0}")]
    MissingConfiguration(&'static str),

    /// Transport-level failure: connect, timeout, DNS.
    #[error("Network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status; `message` is the
    /// response body (the backend's own error text).
    #[error("function '{function}' returned status {status}: {message}")]
    Backend {
        function: String,
        status: u16,
        message: String,
    },

    /// The response body was not the JSON we expected.
    #[error("failed to decode response from '{function}': {source}")]
    Decode {
        function: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure while constructing the underlying HTTP client.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// The localized message safe to show to an end user. Raw error values
    /// and backend bodies never reach the UI layer directly.
    pub fn user_message(&self) -> &'static str {
        translate(self)
    }
}

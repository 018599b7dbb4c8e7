//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files; every
//! field has a default so a minimal (or empty) config is accepted.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::resilience::retry::RetryOptions;

/// Root configuration for the platform client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Primary platform URL (REST data API). Empty when unconfigured.
    pub base_url: String,

    /// Public access credential sent with every request. Empty when unconfigured.
    pub anon_key: String,

    /// Privileged credential. Development only — must never be used when
    /// serving untrusted requests.
    pub service_role_key: String,

    /// Retry behavior for remote calls.
    pub retry: RetryConfig,

    /// Total timeout for a single request attempt, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            anon_key: String::new(),
            service_role_key: String::new(),
            retry: RetryConfig::default(),
            request_timeout_secs: 30,
        }
    }
}

impl ServiceConfig {
    /// The configured primary URL, or the empty string if unset.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured public access credential, or the empty string if unset.
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// True when both the base URL and the public key are present.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.anon_key.is_empty()
    }

    /// Per-attempt request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt.
    pub retries: u32,

    /// Backoff growth factor per attempt.
    pub factor: f64,

    /// Delay before the first retry, in milliseconds.
    pub min_delay_ms: u64,

    /// Hard ceiling on any single delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retries: 2,
            factor: 2.0,
            min_delay_ms: 400,
            max_delay_ms: 4000,
        }
    }
}

impl RetryConfig {
    /// Convert to the runtime options consumed by the retry executor.
    pub fn options(&self) -> RetryOptions {
        RetryOptions {
            retries: self.retries,
            factor: self.factor,
            min_delay: Duration::from_millis(self.min_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
        }
    }
}

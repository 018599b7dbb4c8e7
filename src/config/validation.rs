//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base URL is an absolute http(s) URL when present
//! - Validate value ranges (timeouts > 0, retry factor finite and positive)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - An unconfigured (empty) base URL or key is NOT an error here; degraded
//!   operation is allowed and rejected at the point of use instead

use url::Url;

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `retry.factor`.
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.base_url.is_empty() {
        match Url::parse(&config.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError {
                field: "base_url".into(),
                message: format!("unsupported scheme '{}', expected http or https", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError {
                field: "base_url".into(),
                message: format!("not a valid URL: {}", e),
            }),
        }
    }

    if !(config.retry.factor.is_finite() && config.retry.factor > 0.0) {
        errors.push(ValidationError {
            field: "retry.factor".into(),
            message: "must be a positive finite number".into(),
        });
    }

    if config.retry.max_delay_ms < config.retry.min_delay_ms {
        errors.push(ValidationError {
            field: "retry.max_delay_ms".into(),
            message: "must be >= retry.min_delay_ms".into(),
        });
    }

    if config.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "request_timeout_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

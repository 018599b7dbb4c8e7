//! Configuration loading from the environment and from disk.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the primary platform URL.
pub const ENV_BASE_URL: &str = "BASE_URL";
/// Environment variable naming the public access credential.
pub const ENV_ANON_KEY: &str = "ANON_KEY";
/// Environment variable naming the privileged credential (development only).
pub const ENV_SERVICE_ROLE_KEY: &str = "SERVICE_ROLE_KEY";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Build a configuration from the process environment alone.
///
/// Missing variables are tolerated and degrade to empty strings; callers that
/// need a working remote (e.g. [`crate::FunctionsClient`]) reject empty
/// values themselves.
pub fn from_env() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    apply_env(&mut config);
    config
}

/// Load a TOML config file, apply environment overrides, and validate.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: ServiceConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    apply_env(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Environment variables take precedence over file values.
fn apply_env(config: &mut ServiceConfig) {
    if let Ok(url) = env::var(ENV_BASE_URL) {
        config.base_url = url;
    }
    if let Ok(key) = env::var(ENV_ANON_KEY) {
        config.anon_key = key;
    }
    if let Ok(key) = env::var(ENV_SERVICE_ROLE_KEY) {
        config.service_role_key = key;
    }
}

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (BASE_URL, ANON_KEY, SERVICE_ROLE_KEY)
//!     and/or config file (TOML)
//!     → loader.rs (parse & deserialize, env overrides file)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → passed by reference to endpoints / client
//! ```
//!
//! # Design Decisions
//! - Config is an explicit value constructed once at process start; nothing
//!   reads ambient environment state after that
//! - All fields have defaults; absent values degrade to empty strings and are
//!   rejected at the point of use, not at load time
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{from_env, load_config, ConfigError};
pub use schema::{RetryConfig, ServiceConfig};

//! Endpoint resolution for the auxiliary (edge functions) service.
//!
//! # Responsibilities
//! - Derive the functions service root from the configured base URL
//! - Build per-function URLs with the fixed `functions/v1` path shape
//!
//! # Design Decisions
//! - Self-hosted deployments expose the data API and the functions runtime on
//!   distinct ports of the same host; the port marker in the base URL is
//!   substituted. Cloud and reverse-proxied deployments route both services
//!   through one host, so the base URL is reused as-is
//! - Pure derivation from the config reference at call time; nothing cached

use crate::config::ServiceConfig;

/// Port the data API listens on in a self-hosted direct-port deployment.
pub const DATA_API_PORT: u16 = 54327;

/// Port the functions runtime listens on in the same deployment.
pub const FUNCTIONS_PORT: u16 = 54325;

/// Fixed, versioned path segment every function URL goes through. Deployed
/// functions are addressed as `{base}/functions/v1/{name}`; this shape is a
/// compatibility contract with the platform.
const FUNCTIONS_PATH: &str = "functions/v1";

/// The root URL of the functions service.
///
/// A base URL carrying the data-API port marker is rewritten to the functions
/// port; any other base URL is returned with one trailing slash stripped.
pub fn functions_base(config: &ServiceConfig) -> String {
    let base_url = config.base_url();
    let data_port_marker = format!(":{}", DATA_API_PORT);

    if base_url.contains(&data_port_marker) {
        return base_url.replace(&data_port_marker, &format!(":{}", FUNCTIONS_PORT));
    }

    base_url.strip_suffix('/').unwrap_or(base_url).to_string()
}

/// The full URL of a named function.
///
/// Every join point gets exactly one `/`, regardless of stray slashes on the
/// base or the name.
pub fn function_url(config: &ServiceConfig, name: &str) -> String {
    let base = functions_base(config);
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        FUNCTIONS_PATH,
        name.trim_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ServiceConfig {
        ServiceConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn self_hosted_port_is_substituted() {
        let config = config("http://10.0.0.5:54327");
        assert_eq!(functions_base(&config), "http://10.0.0.5:54325");
    }

    #[test]
    fn cloud_base_keeps_host_and_drops_trailing_slash() {
        let config = config("https://api.example.com/");
        assert_eq!(functions_base(&config), "https://api.example.com");
    }

    #[test]
    fn unconfigured_base_stays_empty() {
        let config = config("");
        assert_eq!(functions_base(&config), "");
    }

    #[test]
    fn function_url_has_the_versioned_path_shape() {
        let config = config("https://api.example.com");
        assert_eq!(
            function_url(&config, "send-email"),
            "https://api.example.com/functions/v1/send-email"
        );
    }

    #[test]
    fn function_url_uses_the_functions_port_when_self_hosted() {
        let config = config("http://10.0.0.5:54327");
        assert_eq!(
            function_url(&config, "accept-invite"),
            "http://10.0.0.5:54325/functions/v1/accept-invite"
        );
    }

    #[test]
    fn stray_slashes_never_double_up() {
        let config = config("https://api.example.com/");
        assert_eq!(
            function_url(&config, "/send-email/"),
            "https://api.example.com/functions/v1/send-email"
        );
    }
}

//! Edge function invocation.

use reqwest::{header, Method};
use serde_json::Value;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::endpoints;
use crate::errors::ClientError;
use crate::observability::metrics;
use crate::resilience::retry::{retry_async, RetryOptions};

/// Client for the platform's on-demand functions service.
///
/// Every invocation carries the platform header convention (`Authorization:
/// Bearer <anon key>` plus `apikey`), a fresh `x-request-id`, and runs inside
/// the retry executor with the configured backoff. Cheap to clone and safe to
/// share across tasks; the underlying connection pool is reused.
#[derive(Debug, Clone)]
pub struct FunctionsClient {
    http: reqwest::Client,
    config: ServiceConfig,
    retry: RetryOptions,
}

impl FunctionsClient {
    /// Build a client from a validated configuration.
    ///
    /// Rejects unconfigured deployments up front so that every later failure
    /// is a remote one.
    pub fn new(config: ServiceConfig) -> Result<Self, ClientError> {
        if config.base_url().is_empty() {
            return Err(ClientError::MissingConfiguration("BASE_URL is not set"));
        }
        if config.anon_key().is_empty() {
            return Err(ClientError::MissingConfiguration("ANON_KEY is not set"));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        let retry = config.retry.options();

        Ok(Self { http, config, retry })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Invoke a function with a JSON payload (POST).
    pub async fn invoke(&self, name: &str, payload: &Value) -> Result<Value, ClientError> {
        self.invoke_with(Method::POST, name, Some(payload), &[]).await
    }

    /// Invoke a function with query parameters (GET).
    pub async fn invoke_get(
        &self,
        name: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        self.invoke_with(Method::GET, name, None, query).await
    }

    async fn invoke_with(
        &self,
        method: Method,
        name: &str,
        payload: Option<&Value>,
        query: &[(&str, &str)],
    ) -> Result<Value, ClientError> {
        let url = endpoints::function_url(&self.config, name);
        metrics::record_request(name);

        let result = retry_async(
            |attempt| {
                let method = method.clone();
                let url = url.clone();
                async move {
                    if attempt > 0 {
                        metrics::record_retry(name);
                    }
                    self.send_once(method, &url, name, payload, query, attempt).await
                }
            },
            &self.retry,
        )
        .await;

        if let Err(error) = &result {
            metrics::record_exhausted(name);
            tracing::warn!(function = name, error = %error, "function invocation failed");
        }

        result
    }

    /// One attempt: build, send, and decode a single request.
    async fn send_once(
        &self,
        method: Method,
        url: &str,
        function: &str,
        payload: Option<&Value>,
        query: &[(&str, &str)],
        attempt: u32,
    ) -> Result<Value, ClientError> {
        let request_id = Uuid::new_v4().to_string();

        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", self.config.anon_key()))
            .header("apikey", self.config.anon_key())
            .header("x-request-id", request_id.as_str());

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        tracing::debug!(
            function,
            request_id = %request_id,
            attempt,
            "invoking function"
        );

        let response = request.send().await.map_err(|source| ClientError::Network {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ClientError::Network {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(ClientError::Backend {
                function: function.to_string(),
                status: status.as_u16(),
                message: body,
            });
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            function: function.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_base_url_is_rejected() {
        let config = ServiceConfig {
            anon_key: "public-key".into(),
            ..Default::default()
        };
        let error = FunctionsClient::new(config).unwrap_err();
        assert!(matches!(error, ClientError::MissingConfiguration(_)));
        assert_eq!(
            error.user_message(),
            crate::errors::ErrorCategory::MissingConfiguration.user_message()
        );
    }

    #[test]
    fn unconfigured_anon_key_is_rejected() {
        let config = ServiceConfig {
            base_url: "https://api.example.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            FunctionsClient::new(config),
            Err(ClientError::MissingConfiguration("ANON_KEY is not set"))
        ));
    }

    #[test]
    fn configured_client_builds() {
        let config = ServiceConfig {
            base_url: "https://api.example.com".into(),
            anon_key: "public-key".into(),
            ..Default::default()
        };
        assert!(FunctionsClient::new(config).is_ok());
    }
}

//! HTTP transport for the LifePlus API
//!
//! This module provides:
//! - [`HttpTransport`], the trait every resource client talks through. Tests
//!   exercise clients against a mock server by pointing the shared
//!   configuration at it.
//! - [`ReqwestTransport`], the reqwest-backed implementation. Per request it
//!   snapshots the shared configuration, joins the path onto the base URL,
//!   attaches query pairs unchanged, sets the credential headers for every
//!   populated slot, and tags the request with a fresh `X-Request-ID`.
//!
//! No retries, no caching: one request per call, every failure surfaces to the
//! caller unchanged.

use crate::config::SharedConfig;
use crate::constants::{HEADER_API_KEY, HEADER_PARTNER_ID, HEADER_REQUEST_ID, USER_AGENT};
use crate::error::{ApiError, AppError};
use crate::utils::helpers::generate_request_id;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpInternalClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Transport boundary between resource clients and the network
///
/// Implementations send one JSON request and deserialize one JSON response.
/// Resource clients are generic over this trait, which is the seam used to
/// inject a mock transport or point the real one at a test server.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and deserializes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the configured base URL
    /// * `query` - Query pairs, attached unchanged
    /// * `body` - Optional JSON body
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send;

    /// Makes a GET request
    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.request::<(), T>(Method::GET, path, query, None).await
    }

    /// Makes a POST request with a JSON body
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Makes a POST request without a body
    async fn post_empty<T>(&self, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.request::<(), T>(Method::POST, path, &[], None).await
    }

    /// Makes a PUT request with a JSON body
    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// Makes a DELETE request
    async fn delete<T>(&self, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.request::<(), T>(Method::DELETE, path, &[], None).await
    }
}

/// Shape of the error body the API sends for non-2xx responses
#[derive(serde::Deserialize, Default)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<HashMap<String, Vec<String>>>,
}

fn parse_api_error(status: u16, body: &str) -> ApiError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    ApiError {
        status,
        message: parsed.message.unwrap_or_default(),
        errors: parsed.errors.unwrap_or_default(),
    }
}

/// reqwest-backed [`HttpTransport`]
///
/// Holds its own `reqwest::Client` plus a clone of the shared configuration
/// handle; every facade resource accessor builds a fresh instance, so resource
/// clients share credentials but not connections.
pub struct ReqwestTransport {
    config: SharedConfig,
    http: HttpInternalClient,
}

impl ReqwestTransport {
    /// Creates a transport bound to the given shared configuration
    ///
    /// # Panics
    /// Panics when the underlying `reqwest::Client` cannot be built, which
    /// only happens when the TLS backend fails to initialize. The facade
    /// accessors are infallible, so this is not propagated as an error.
    pub fn new(config: SharedConfig) -> Self {
        let http = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send,
    {
        // Snapshot the configuration so credential changes mid-flight cannot
        // produce a half-updated header set.
        let (base_url, debug_enabled, timeout, credentials) = {
            let config = self.config.read().await;
            (
                config.base_url.clone(),
                config.debug,
                config.timeout,
                config.credentials.clone(),
            )
        };

        let url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let request_id = generate_request_id();

        let mut request = self
            .http
            .request(method.clone(), &url)
            .timeout(Duration::from_secs(timeout))
            .header(ACCEPT, "application/json")
            .header(HEADER_REQUEST_ID, &request_id);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &credentials.access_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(api_key) = &credentials.api_key {
            request = request.header(HEADER_API_KEY, api_key);
        }
        if let Some(partner_id) = &credentials.partner_id {
            request = request.header(HEADER_PARTNER_ID, partner_id);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        if debug_enabled {
            debug!("{} {} [request {}]", method, url, request_id);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if debug_enabled {
            debug!(
                "{} {} -> {} ({} bytes) [request {}]",
                method,
                url,
                status,
                text.len(),
                request_id
            );
        }

        if status.is_success() {
            // Some endpoints answer 2xx with an empty body.
            if text.trim().is_empty() {
                return Ok(serde_json::from_str("{}")?);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        warn!("{} {} failed with status {}", method, url, status);

        match status {
            StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized),
            StatusCode::NOT_FOUND => Err(AppError::NotFound),
            s if s.is_client_error() || s.is_server_error() => {
                Err(AppError::Api(parse_api_error(s.as_u16(), &text)))
            }
            s => Err(AppError::Unexpected(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_error_with_field_errors() {
        let body = r#"{"message":"validation failed","errors":{"phone":["required"]}}"#;
        let error = parse_api_error(422, body);
        assert_eq!(error.status, 422);
        assert_eq!(error.message, "validation failed");
        assert_eq!(
            error.errors.get("phone"),
            Some(&vec!["required".to_string()])
        );
    }

    #[test]
    fn test_parse_api_error_unparseable_body() {
        let error = parse_api_error(500, "<html>oops</html>");
        assert_eq!(error.status, 500);
        assert!(error.message.is_empty());
        assert!(error.errors.is_empty());
    }
}

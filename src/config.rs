//! Configuration for the LifePlus API client
//!
//! A single [`Config`] value is shared by the facade and every resource client
//! through a [`SharedConfig`] handle. Credential slots are independent: the
//! bearer token set by a login and the partner credentials used for
//! server-to-server calls may coexist.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared, synchronized handle to the client configuration
///
/// Every resource client holds a clone of this handle, so credential changes
/// made through the facade are visible to all of them. Concurrent credential
/// mutation serializes on the lock; last writer wins.
pub type SharedConfig = Arc<RwLock<Config>>;

/// Named credential slots used to build request headers
///
/// The three slots are independent of each other: setting one never clears
/// another.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Credentials {
    /// Bearer token obtained from login or OTP verification
    pub access_token: Option<String>,
    /// Partner API key sent as `X-API-Key`
    pub api_key: Option<String>,
    /// Partner identifier sent as `X-Partner-ID`
    pub partner_id: Option<String>,
}

/// Main configuration for the LifePlus API client
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the API, e.g. `https://api.lifeplusbd.com/api/v2`
    pub base_url: String,
    /// When true, request and response details are logged at debug level
    pub debug: bool,
    /// Request timeout in seconds, applied per request by the transport
    pub timeout: u64,
    /// Credential slots consumed when building request headers
    pub credentials: Credentials,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables
    ///
    /// Reads `LIFEPLUS_BASE_URL`, `LIFEPLUS_DEBUG`, `LIFEPLUS_TIMEOUT`,
    /// `LIFEPLUS_ACCESS_TOKEN`, `LIFEPLUS_API_KEY` and `LIFEPLUS_PARTNER_ID`,
    /// loading a `.env` file first when one is present. Missing variables fall
    /// back to defaults.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        Config {
            base_url: get_env_or_default("LIFEPLUS_BASE_URL", String::from(DEFAULT_BASE_URL)),
            debug: get_env_or_default("LIFEPLUS_DEBUG", false),
            timeout: get_env_or_default("LIFEPLUS_TIMEOUT", DEFAULT_TIMEOUT_SECONDS),
            credentials: Credentials {
                access_token: get_env_or_none("LIFEPLUS_ACCESS_TOKEN"),
                api_key: get_env_or_none("LIFEPLUS_API_KEY"),
                partner_id: get_env_or_none("LIFEPLUS_PARTNER_ID"),
            },
        }
    }

    /// Creates a configuration pointing at the given base URL
    ///
    /// Uses default timeout, debug off and empty credential slots.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
            debug: false,
            timeout: DEFAULT_TIMEOUT_SECONDS,
            credentials: Credentials::default(),
        }
    }

    /// Wraps this configuration in a [`SharedConfig`] handle
    pub fn into_shared(self) -> SharedConfig {
        Arc::new(RwLock::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_defaults() {
        let config = Config::with_base_url("https://api.example.com/api/v2");
        assert_eq!(config.base_url, "https://api.example.com/api/v2");
        assert!(!config.debug);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECONDS);
        assert!(config.credentials.access_token.is_none());
        assert!(config.credentials.api_key.is_none());
        assert!(config.credentials.partner_id.is_none());
    }

    #[test]
    fn test_credential_slots_independent() {
        let mut credentials = Credentials::default();
        credentials.access_token = Some("token".to_string());
        credentials.api_key = Some("key".to_string());
        credentials.partner_id = Some("partner".to_string());

        credentials.access_token = None;
        assert_eq!(credentials.api_key.as_deref(), Some("key"));
        assert_eq!(credentials.partner_id.as_deref(), Some("partner"));
    }
}

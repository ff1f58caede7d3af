//! Error types for the LifePlus API client
//!
//! The taxonomy mirrors what the server can actually produce: transport
//! failures, structured API errors (non-2xx with an optional field-validation
//! map), and authentication failures as their own variant so login errors can
//! be matched directly. Nothing is swallowed or retried; every failure reaches
//! the caller unchanged.

use reqwest::StatusCode;
use std::collections::HashMap;
use std::fmt;

/// Structured error returned by the API for non-2xx responses
///
/// Carries the HTTP status, the server message and, for validation failures
/// (typically 422), a map from field name to the list of messages for that
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// Server-provided error message, empty when the body had none
    pub message: String,
    /// Field-level validation errors, empty when the body had none
    pub errors: HashMap<String, Vec<String>>,
}

impl ApiError {
    /// Creates an API error with no field-level details
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: HashMap::new(),
        }
    }

    /// Returns the messages recorded for a given field, if any
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(|v| v.as_slice())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "api error ({}): {}", self.status, self.message)
        } else {
            write!(
                f,
                "api error ({}): {} [{} field(s) invalid]",
                self.status,
                self.message,
                self.errors.len()
            )
        }
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure (connection, TLS, timeout)
    Network(reqwest::Error),
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
    /// Authentication rejected by the server (HTTP 401)
    Unauthorized,
    /// Resource not found (HTTP 404)
    NotFound,
    /// Structured non-2xx API response
    Api(ApiError),
    /// Invalid input detected before sending a request
    InvalidInput(String),
    /// Response status that does not fit any other variant
    Unexpected(StatusCode),
}

impl AppError {
    /// Returns the structured API error when this is an [`AppError::Api`]
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Api(e) => write!(f, "{e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

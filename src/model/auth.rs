//! Authentication request and response models
//!
//! Session responses carry the bearer token at `data.token`; the facade reads
//! it from there after a successful login or OTP verification.

use crate::model::serialization::option_string_empty_as_none;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Credentials for a password login
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct SessionRequest {
    /// Phone number, e.g. `01712345678`
    pub phone: String,
    /// Account password
    pub password: String,
}

impl SessionRequest {
    /// Creates a login request from phone and password
    pub fn new(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            password: password.into(),
        }
    }
}

/// Payload for verifying a phone number with an OTP code
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct VerifyPhoneRequest {
    /// Phone number the OTP was sent to
    pub phone: String,
    /// OTP code received via SMS
    pub otp: String,
}

/// Payload for requesting an OTP code
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct OtpRequest {
    /// Phone number to send the OTP to
    pub phone: String,
}

/// Profile of the authenticated user
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub date_of_birth: Option<String>,
}

/// Inner payload of a session response
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct SessionData {
    /// Bearer token for subsequent requests, absent when login needs another step
    #[serde(default)]
    pub token: Option<String>,
    /// Profile of the user the session belongs to
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Response of the session and OTP-verification endpoints
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct SessionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<SessionData>,
}

impl SessionResponse {
    /// Returns the bearer token from `data.token`, if the server sent one
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.token.as_deref())
    }

    /// Returns the user profile, if the server sent one
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.data.as_ref().and_then(|d| d.user.as_ref())
    }
}

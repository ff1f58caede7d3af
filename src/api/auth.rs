//! Auth resource client
//!
//! Wraps the session endpoints. Token bookkeeping lives in the facade; this
//! client only performs the HTTP calls and returns the raw session responses.

use crate::error::AppError;
use crate::model::auth::{OtpRequest, SessionRequest, SessionResponse, VerifyPhoneRequest};
use crate::model::responses::MessageResponse;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/auth` endpoints
pub struct AuthApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> AuthApi<T> {
    /// Creates a new auth client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Creates a session from phone and password
    ///
    /// On success the response carries the bearer token at `data.token`.
    /// Authentication failures surface as [`AppError::Unauthorized`].
    pub async fn create_session(
        &self,
        request: &SessionRequest,
    ) -> Result<SessionResponse, AppError> {
        self.transport.post("/auth/sessions", request).await
    }

    /// Verifies a phone number with an OTP code, creating a session
    pub async fn verify_phone(&self, phone: &str, otp: &str) -> Result<SessionResponse, AppError> {
        let request = VerifyPhoneRequest {
            phone: phone.to_string(),
            otp: otp.to_string(),
        };
        self.transport.post("/auth/verify-otp", &request).await
    }

    /// Requests an OTP code to be sent to the given phone number
    pub async fn request_otp(&self, phone: &str) -> Result<MessageResponse, AppError> {
        let request = OtpRequest {
            phone: phone.to_string(),
        };
        self.transport.post("/auth/otp", &request).await
    }

    /// Invalidates the current session on the server
    pub async fn logout(&self) -> Result<MessageResponse, AppError> {
        self.transport.post_empty("/auth/logout").await
    }
}

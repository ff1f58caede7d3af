//! Generic response wrappers
//!
//! Every LifePlus endpoint wraps its payload in a `{message, data}` envelope.

use serde::{Deserialize, Serialize};

/// Standard `{message, data}` envelope around every response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwraps the envelope, discarding the message
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Response carrying only a confirmation message (logout, deletes, clears)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

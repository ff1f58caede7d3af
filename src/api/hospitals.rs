//! Hospitals resource client

use crate::error::AppError;
use crate::model::requests::SearchRequest;
use crate::model::resources::Hospital;
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/hospitals` endpoints
pub struct HospitalsApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> HospitalsApi<T> {
    /// Creates a new hospitals client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists hospitals, optionally filtered by a search term
    pub async fn list_hospitals(&self, request: &SearchRequest) -> Result<Vec<Hospital>, AppError> {
        let response: Envelope<Vec<Hospital>> =
            self.transport.get("/hospitals", &request.query()).await?;
        Ok(response.data)
    }

    /// Fetches a single hospital by ID
    pub async fn get_hospital(&self, id: u64) -> Result<Hospital, AppError> {
        let response: Envelope<Hospital> =
            self.transport.get(&format!("/hospitals/{id}"), &[]).await?;
        Ok(response.data)
    }
}

//! Doctors resource client

use crate::error::AppError;
use crate::model::requests::ListDoctorsRequest;
use crate::model::resources::Doctor;
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/doctors` endpoints
pub struct DoctorsApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> DoctorsApi<T> {
    /// Creates a new doctors client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists doctors, optionally filtered by search term or specialty
    pub async fn list_doctors(&self, request: &ListDoctorsRequest) -> Result<Vec<Doctor>, AppError> {
        let response: Envelope<Vec<Doctor>> =
            self.transport.get("/doctors", &request.query()).await?;
        Ok(response.data)
    }

    /// Fetches a single doctor by ID
    pub async fn get_doctor(&self, id: u64) -> Result<Doctor, AppError> {
        let response: Envelope<Doctor> =
            self.transport.get(&format!("/doctors/{id}"), &[]).await?;
        Ok(response.data)
    }
}

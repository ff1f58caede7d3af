//! Ambulance resource client

use crate::error::AppError;
use crate::model::requests::{AmbulanceRequest, PageRequest};
use crate::model::resources::{AmbulanceBooking, AmbulanceType};
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/ambulance` endpoints
pub struct AmbulanceApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> AmbulanceApi<T> {
    /// Creates a new ambulance client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists the ambulance categories offered by the platform
    pub async fn list_types(&self) -> Result<Vec<AmbulanceType>, AppError> {
        let response: Envelope<Vec<AmbulanceType>> =
            self.transport.get("/ambulance/types", &[]).await?;
        Ok(response.data)
    }

    /// Requests an ambulance trip
    pub async fn request_ambulance(
        &self,
        request: &AmbulanceRequest,
    ) -> Result<AmbulanceBooking, AppError> {
        let response: Envelope<AmbulanceBooking> =
            self.transport.post("/ambulance/requests", request).await?;
        Ok(response.data)
    }

    /// Lists the current user's ambulance requests
    pub async fn list_requests(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<AmbulanceBooking>, AppError> {
        let response: Envelope<Vec<AmbulanceBooking>> = self
            .transport
            .get("/ambulance/requests", &request.query())
            .await?;
        Ok(response.data)
    }
}

//! Home-care resource client

use crate::error::AppError;
use crate::model::requests::{HomeCareRequest, PageRequest};
use crate::model::resources::{HomeCareBooking, HomeCareService};
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/home-care` endpoints
pub struct HomeCareApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> HomeCareApi<T> {
    /// Creates a new home-care client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists the home-care services offered by the platform
    pub async fn list_services(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<HomeCareService>, AppError> {
        let response: Envelope<Vec<HomeCareService>> = self
            .transport
            .get("/home-care/services", &request.query())
            .await?;
        Ok(response.data)
    }

    /// Books a home-care service
    pub async fn book(
        &self,
        service_id: u64,
        request: &HomeCareRequest,
    ) -> Result<HomeCareBooking, AppError> {
        let response: Envelope<HomeCareBooking> = self
            .transport
            .post(&format!("/home-care/services/{service_id}/bookings"), request)
            .await?;
        Ok(response.data)
    }
}

//! Home sample-collection resource client

use crate::error::AppError;
use crate::model::requests::{HomeSampleRequest, PageRequest};
use crate::model::resources::HomeSampleBooking;
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/home-sample` endpoints
pub struct HomeSampleApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> HomeSampleApi<T> {
    /// Creates a new home-sample client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Books a sample collection at the user's address
    pub async fn book(&self, request: &HomeSampleRequest) -> Result<HomeSampleBooking, AppError> {
        let response: Envelope<HomeSampleBooking> = self
            .transport
            .post("/home-sample/bookings", request)
            .await?;
        Ok(response.data)
    }

    /// Lists the current user's sample-collection bookings
    pub async fn list_bookings(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<HomeSampleBooking>, AppError> {
        let response: Envelope<Vec<HomeSampleBooking>> = self
            .transport
            .get("/home-sample/bookings", &request.query())
            .await?;
        Ok(response.data)
    }
}

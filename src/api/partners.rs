//! Partners resource client
//!
//! Server-to-server channel. These endpoints authenticate with the partner
//! credential slots (`X-API-Key`, `X-Partner-ID`) rather than a user session;
//! set them through the facade's `set_partner_credentials`.

use crate::error::AppError;
use crate::model::requests::PartnerOrderRequest;
use crate::model::resources::PartnerOrder;
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/partners` endpoints
pub struct PartnersApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> PartnersApi<T> {
    /// Creates a new partners client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Places an order on behalf of a partner's customer
    pub async fn create_order(
        &self,
        request: &PartnerOrderRequest,
    ) -> Result<PartnerOrder, AppError> {
        let response: Envelope<PartnerOrder> =
            self.transport.post("/partners/orders", request).await?;
        Ok(response.data)
    }

    /// Fetches the status of a partner order
    pub async fn order_status(&self, id: u64) -> Result<PartnerOrder, AppError> {
        let response: Envelope<PartnerOrder> = self
            .transport
            .get(&format!("/partners/orders/{id}"), &[])
            .await?;
        Ok(response.data)
    }
}

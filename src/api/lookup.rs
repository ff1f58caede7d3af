//! Lookup resource client

use crate::error::AppError;
use crate::model::resources::{District, PaymentMethod, Specialty};
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/lookup` endpoints
pub struct LookupApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> LookupApi<T> {
    /// Creates a new lookup client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists all medical specialties
    pub async fn specialties(&self) -> Result<Vec<Specialty>, AppError> {
        let response: Envelope<Vec<Specialty>> =
            self.transport.get("/lookup/specialties", &[]).await?;
        Ok(response.data)
    }

    /// Lists all districts
    pub async fn districts(&self) -> Result<Vec<District>, AppError> {
        let response: Envelope<Vec<District>> =
            self.transport.get("/lookup/districts", &[]).await?;
        Ok(response.data)
    }

    /// Lists the payment methods accepted at checkout
    pub async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, AppError> {
        let response: Envelope<Vec<PaymentMethod>> =
            self.transport.get("/lookup/payment-methods", &[]).await?;
        Ok(response.data)
    }
}

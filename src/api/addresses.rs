//! Addresses resource client

use crate::error::AppError;
use crate::model::requests::CreateAddressRequest;
use crate::model::resources::Address;
use crate::model::responses::{Envelope, MessageResponse};
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/addresses` endpoints
pub struct AddressesApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> AddressesApi<T> {
    /// Creates a new addresses client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists the current user's saved addresses
    pub async fn list_addresses(&self) -> Result<Vec<Address>, AppError> {
        let response: Envelope<Vec<Address>> = self.transport.get("/addresses", &[]).await?;
        Ok(response.data)
    }

    /// Saves a new address
    pub async fn create(&self, request: &CreateAddressRequest) -> Result<Address, AppError> {
        let response: Envelope<Address> = self.transport.post("/addresses", request).await?;
        Ok(response.data)
    }

    /// Updates an existing address
    pub async fn update(
        &self,
        id: u64,
        request: &CreateAddressRequest,
    ) -> Result<Address, AppError> {
        let response: Envelope<Address> = self
            .transport
            .put(&format!("/addresses/{id}"), request)
            .await?;
        Ok(response.data)
    }

    /// Deletes an address by ID
    pub async fn delete(&self, id: u64) -> Result<MessageResponse, AppError> {
        self.transport.delete(&format!("/addresses/{id}")).await
    }
}

//! Packages resource client

use crate::error::AppError;
use crate::model::requests::SearchRequest;
use crate::model::resources::Package;
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/packages` endpoints
pub struct PackagesApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> PackagesApi<T> {
    /// Creates a new packages client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists healthcare packages, optionally filtered by a search term
    pub async fn list_packages(&self, request: &SearchRequest) -> Result<Vec<Package>, AppError> {
        let response: Envelope<Vec<Package>> =
            self.transport.get("/packages", &request.query()).await?;
        Ok(response.data)
    }

    /// Fetches a single package by ID
    pub async fn get_package(&self, id: u64) -> Result<Package, AppError> {
        let response: Envelope<Package> =
            self.transport.get(&format!("/packages/{id}"), &[]).await?;
        Ok(response.data)
    }
}

//! Products resource client

use crate::error::AppError;
use crate::model::requests::ListProductsRequest;
use crate::model::resources::{Category, Product};
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/products` endpoints
pub struct ProductsApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> ProductsApi<T> {
    /// Creates a new products client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists products, optionally filtered by search term or category
    ///
    /// Pagination parameters are passed through unchanged; the caller requests
    /// subsequent pages explicitly.
    pub async fn list_products(
        &self,
        request: &ListProductsRequest,
    ) -> Result<Vec<Product>, AppError> {
        let response: Envelope<Vec<Product>> =
            self.transport.get("/products", &request.query()).await?;
        Ok(response.data)
    }

    /// Fetches a single product by ID
    pub async fn get_product(&self, id: u64) -> Result<Product, AppError> {
        let response: Envelope<Product> =
            self.transport.get(&format!("/products/{id}"), &[]).await?;
        Ok(response.data)
    }

    /// Lists the lifestyle product categories
    pub async fn lifestyle_categories(&self) -> Result<Vec<Category>, AppError> {
        let response: Envelope<Vec<Category>> = self
            .transport
            .get("/products/lifestyle-categories", &[])
            .await?;
        Ok(response.data)
    }
}

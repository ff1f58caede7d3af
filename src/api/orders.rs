//! Orders resource client

use crate::error::AppError;
use crate::model::requests::{CreateOrderRequest, PageRequest};
use crate::model::resources::Order;
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/orders` endpoints
pub struct OrdersApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> OrdersApi<T> {
    /// Creates a new orders client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists the current user's orders
    pub async fn list_orders(&self, request: &PageRequest) -> Result<Vec<Order>, AppError> {
        let response: Envelope<Vec<Order>> =
            self.transport.get("/orders", &request.query()).await?;
        Ok(response.data)
    }

    /// Fetches a single order by ID
    pub async fn get_order(&self, id: u64) -> Result<Order, AppError> {
        let response: Envelope<Order> =
            self.transport.get(&format!("/orders/{id}"), &[]).await?;
        Ok(response.data)
    }

    /// Places an order from a cart
    ///
    /// The server validates that the cart and address belong to the current
    /// user and that the payment method key is accepted.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<Order, AppError> {
        let response: Envelope<Order> = self.transport.post("/orders", request).await?;
        Ok(response.data)
    }
}

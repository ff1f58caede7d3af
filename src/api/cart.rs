//! Cart resource client

use crate::error::AppError;
use crate::model::requests::{AddToCartRequest, UpdateCartItemRequest};
use crate::model::resources::Cart;
use crate::model::responses::{Envelope, MessageResponse};
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/cart` endpoints
pub struct CartApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> CartApi<T> {
    /// Creates a new cart client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetches the current user's cart
    pub async fn get_cart(&self) -> Result<Cart, AppError> {
        let response: Envelope<Cart> = self.transport.get("/cart", &[]).await?;
        Ok(response.data)
    }

    /// Adds a product to the cart
    ///
    /// # Errors
    /// [`AppError::InvalidInput`] when `quantity` is zero, before any request
    /// is sent.
    pub async fn add_item(&self, product_id: u64, quantity: u32) -> Result<Cart, AppError> {
        if quantity == 0 {
            return Err(AppError::InvalidInput(
                "quantity must be positive".to_string(),
            ));
        }
        let request = AddToCartRequest {
            product_id,
            quantity,
        };
        let response: Envelope<Cart> = self.transport.post("/cart/items", &request).await?;
        Ok(response.data)
    }

    /// Changes the quantity of a cart item
    ///
    /// Use [`remove_item`](Self::remove_item) to drop an item; a zero quantity
    /// is rejected client-side.
    pub async fn update_item(&self, item_id: u64, quantity: u32) -> Result<Cart, AppError> {
        if quantity == 0 {
            return Err(AppError::InvalidInput(
                "quantity must be positive".to_string(),
            ));
        }
        let request = UpdateCartItemRequest { quantity };
        let response: Envelope<Cart> = self
            .transport
            .put(&format!("/cart/items/{item_id}"), &request)
            .await?;
        Ok(response.data)
    }

    /// Removes an item from the cart
    pub async fn remove_item(&self, item_id: u64) -> Result<Cart, AppError> {
        let response: Envelope<Cart> = self
            .transport
            .delete(&format!("/cart/items/{item_id}"))
            .await?;
        Ok(response.data)
    }

    /// Empties the cart
    pub async fn clear(&self) -> Result<MessageResponse, AppError> {
        self.transport.delete("/cart").await
    }
}

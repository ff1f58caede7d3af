//! Wellbeing resource client

use crate::error::AppError;
use crate::model::requests::ListContentRequest;
use crate::model::resources::WellbeingArticle;
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/wellbeing` endpoints
pub struct WellbeingApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> WellbeingApi<T> {
    /// Creates a new wellbeing client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists wellbeing articles, optionally filtered by category
    pub async fn list_content(
        &self,
        request: &ListContentRequest,
    ) -> Result<Vec<WellbeingArticle>, AppError> {
        let response: Envelope<Vec<WellbeingArticle>> = self
            .transport
            .get("/wellbeing/content", &request.query())
            .await?;
        Ok(response.data)
    }
}

//! Telemedicine resource client

use crate::error::AppError;
use crate::model::requests::BookCallRequest;
use crate::model::resources::{TelemedicineCall, TelemedicineSlot};
use crate::model::responses::Envelope;
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/telemedicine` endpoints
pub struct TelemedicineApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> TelemedicineApi<T> {
    /// Creates a new telemedicine client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists the available call slots for a doctor on a given date
    pub async fn available_slots(
        &self,
        doctor_id: u64,
        date: &str,
    ) -> Result<Vec<TelemedicineSlot>, AppError> {
        let query = [
            ("doctor_id", doctor_id.to_string()),
            ("date", date.to_string()),
        ];
        let response: Envelope<Vec<TelemedicineSlot>> =
            self.transport.get("/telemedicine/slots", &query).await?;
        Ok(response.data)
    }

    /// Books a telemedicine call with a doctor
    pub async fn book_call(&self, request: &BookCallRequest) -> Result<TelemedicineCall, AppError> {
        let response: Envelope<TelemedicineCall> =
            self.transport.post("/telemedicine/calls", request).await?;
        Ok(response.data)
    }
}

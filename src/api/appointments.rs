//! Appointments resource client

use crate::error::AppError;
use crate::model::requests::{BookAppointmentRequest, PageRequest};
use crate::model::resources::Appointment;
use crate::model::responses::{Envelope, MessageResponse};
use crate::transport::HttpTransport;
use std::sync::Arc;

/// Client for the `/appointments` endpoints
pub struct AppointmentsApi<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> AppointmentsApi<T> {
    /// Creates a new appointments client on the given transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists the current user's appointments
    pub async fn list_appointments(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<Appointment>, AppError> {
        let response: Envelope<Vec<Appointment>> = self
            .transport
            .get("/appointments", &request.query())
            .await?;
        Ok(response.data)
    }

    /// Books an appointment with a doctor
    pub async fn book(&self, request: &BookAppointmentRequest) -> Result<Appointment, AppError> {
        let response: Envelope<Appointment> =
            self.transport.post("/appointments", request).await?;
        Ok(response.data)
    }

    /// Cancels an appointment by ID
    pub async fn cancel(&self, id: u64) -> Result<MessageResponse, AppError> {
        self.transport.delete(&format!("/appointments/{id}")).await
    }
}

//! CRM adapter that only logs
//!
//! Stands in for a real CRM client. Every submission is written to the
//! `crm` tracing target and acknowledged.

use async_trait::async_trait;
use tracing::info;

use crate::application::ports::{BookingCrmPayload, ContactSubmission, CrmError, CrmSync};

#[derive(Debug, Default, Clone)]
pub struct LoggingCrmSync;

impl LoggingCrmSync {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CrmSync for LoggingCrmSync {
    async fn sync_booking(&self, payload: &BookingCrmPayload) -> Result<(), CrmError> {
        info!(
            target: "crm",
            booking_id = %payload.booking_id,
            unit = %payload.unit_name,
            unit_type = %payload.unit_type,
            guest = %payload.guest_name,
            email = %payload.guest_email,
            check_in = %payload.check_in,
            check_out = %payload.check_out,
            guests = payload.guests,
            total_cents = payload.total_cents,
            currency = %payload.currency,
            "Booking synced to CRM"
        );
        Ok(())
    }

    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), CrmError> {
        info!(
            target: "crm",
            name = %submission.name,
            email = %submission.email,
            unit_id = ?submission.unit_id,
            check_in = ?submission.check_in,
            check_out = ?submission.check_out,
            "Contact submission forwarded to CRM"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn logging_adapter_accepts_everything() {
        let crm = LoggingCrmSync::new();
        let contact = ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "5551234567".to_string(),
            message: "Looking for a winter stay".to_string(),
            ..Default::default()
        };
        assert!(crm.submit_contact(&contact).await.is_ok());
    }
}

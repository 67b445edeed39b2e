//! Outbound ports: interfaces for pushing guest data to the CRM
//!
//! [`CrmSync`] decouples the booking and contact services from whatever
//! CRM the property uses. The shipped implementation is
//! [`LoggingCrmSync`](crate::infrastructure::crm::LoggingCrmSync).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Failure reported by a CRM adapter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CrmError {
    #[error("CRM request failed: {0}")]
    Request(String),

    #[error("CRM rejected submission: {0}")]
    Rejected(String),
}

/// Booking summary sent after a booking is stored
#[derive(Debug, Clone)]
pub struct BookingCrmPayload {
    pub booking_id: String,
    pub unit_name: String,
    pub unit_type: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub total_cents: i64,
    pub currency: String,
    pub special_requests: Option<String>,
}

/// Lead captured by the contact form
#[derive(Debug, Clone, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub preferred_dates: Option<String>,
    pub unit_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<i32>,
}

// ── CrmSync ────────────────────────────────────────────────────

/// Port for pushing bookings and leads to the CRM.
#[async_trait]
pub trait CrmSync: Send + Sync {
    /// Record a confirmed booking. Callers treat failures as non-fatal.
    async fn sync_booking(&self, payload: &BookingCrmPayload) -> Result<(), CrmError>;

    /// Forward a contact form submission.
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), CrmError>;
}

pub type SharedCrmSync = Arc<dyn CrmSync>;

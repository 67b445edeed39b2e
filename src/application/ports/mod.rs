//! Application ports (hexagonal architecture boundaries)
//!
//! Outbound ports for collaborators outside the process live here.

pub mod outbound;

pub use outbound::{BookingCrmPayload, ContactSubmission, CrmError, CrmSync, SharedCrmSync};

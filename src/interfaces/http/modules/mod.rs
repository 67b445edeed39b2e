//! REST API modules, one per resource

pub mod availability;
pub mod bookings;
pub mod catalog;
pub mod contacts;
pub mod health;
pub mod holds;
pub mod metrics;
pub mod pricing;
pub mod request_id;
pub mod units;

//! Application services

mod availability;
mod bookings;
mod catalog;
mod contacts;
mod holds;
mod locks;
mod pricing;

pub use availability::{AvailabilityReport, AvailabilityService, FreeRange};
pub use bookings::{BookingDetails, BookingReceipt, BookingService, NewBooking, UnitSelector};
pub use catalog::{resolve_rate_plan, CatalogService, UnitListing};
pub use contacts::ContactService;
pub use holds::{HoldService, HoldSettings};
pub use locks::UnitLocks;
pub use pricing::{PricingService, Quote};

pub mod ports;
pub mod services;

// Re-export key types for convenience
pub use ports::{BookingCrmPayload, ContactSubmission, CrmError, CrmSync, SharedCrmSync};
pub use services::{
    AvailabilityService, BookingService, CatalogService, ContactService, HoldService,
    HoldSettings, PricingService, UnitLocks,
};

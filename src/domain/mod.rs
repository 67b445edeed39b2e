//! Core booking entities, value objects and repository interfaces.

pub mod booking;
pub mod customer;
pub mod fee;
pub mod hold;
pub mod payment;
pub mod pricing;
pub mod rate_plan;
pub mod repositories;
pub mod season;
pub mod stay;
pub mod unit;

pub use booking::{Booking, BookingStatus};
pub use customer::Customer;
pub use fee::Fee;
pub use hold::{Hold, HoldStatus};
pub use payment::Payment;
pub use pricing::{PriceBreakdown, RateTier};
pub use rate_plan::{RatePlan, RatePlanScope};
pub use repositories::{DomainResult, RepositoryProvider};
pub use season::Season;
pub use stay::StayRange;
pub use unit::{Unit, UnitType};

pub use crate::shared::errors::DomainError;

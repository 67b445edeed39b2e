//! Database entities module

pub mod booking;
pub mod customer;
pub mod fee;
pub mod hold;
pub mod payment;
pub mod rate_plan;
pub mod season;
pub mod unit;

pub use booking::Entity as Booking;
pub use customer::Entity as Customer;
pub use fee::Entity as Fee;
pub use hold::Entity as Hold;
pub use payment::Entity as Payment;
pub use rate_plan::Entity as RatePlan;
pub use season::Entity as Season;
pub use unit::Entity as Unit;

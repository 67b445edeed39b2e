//! Unit aggregate
//!
//! Rentable units and their catalog repository.

pub mod model;
pub mod repository;

pub use model::{Unit, UnitType};
pub use repository::UnitRepository;

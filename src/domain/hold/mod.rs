//! Hold aggregate
//!
//! Contains the Hold entity, its lazily-evaluated status and the repository interface.

pub mod model;
pub mod repository;

pub use model::{Hold, HoldStatus};
pub use repository::HoldRepository;

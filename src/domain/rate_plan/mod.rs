pub mod model;
pub mod repository;

pub use model::{RatePlan, RatePlanScope};
pub use repository::RatePlanRepository;

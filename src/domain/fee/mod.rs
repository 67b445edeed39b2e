pub mod model;
pub mod repository;

pub use model::{Fee, MAX_FEE_CENTS};
pub use repository::FeeRepository;

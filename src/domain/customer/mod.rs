pub mod model;
pub mod repository;

pub use model::{split_name, Customer};
pub use repository::CustomerRepository;

pub mod model;
pub mod repository;

pub use model::Payment;
pub use repository::PaymentRepository;

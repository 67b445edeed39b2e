//! Infrastructure layer - external concerns

pub mod crm;
pub mod database;

pub use database::{init_database, DatabaseConfig};

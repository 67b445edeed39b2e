//! # Palm Aire Booking Service
//!
//! Booking backend for the Palm Aire vacation rentals: unit catalog, tiered
//! pricing with seasonal discounts, availability, short-lived holds, bookings
//! and CRM forwarding.
//!
//! ## Architecture
//!
//! - **domain**: Core entities, pricing rules and repository traits
//! - **application**: Use-case services and outbound ports
//! - **infrastructure**: SeaORM persistence, catalog seed, CRM adapter
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: Process runtime and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiState};

pub use server::{ServerHandle, ServerOptions};

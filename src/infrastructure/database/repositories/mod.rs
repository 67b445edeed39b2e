//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod booking_repository;
pub mod customer_repository;
pub mod hold_repository;
pub mod payment_repository;
pub mod rate_plan_repository;
pub mod repository_provider;
pub mod season_repository;
pub mod unit_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
pub use unit_repository::SeaOrmUnitRepository;

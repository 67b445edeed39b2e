//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_units;
mod m20250101_000002_create_rate_plans;
mod m20250101_000003_create_seasons_and_fees;
mod m20250101_000004_create_holds;
mod m20250101_000005_create_customers;
mod m20250101_000006_create_bookings;
mod m20250101_000007_create_payments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_units::Migration),
            Box::new(m20250101_000002_create_rate_plans::Migration),
            Box::new(m20250101_000003_create_seasons_and_fees::Migration),
            Box::new(m20250101_000004_create_holds::Migration),
            Box::new(m20250101_000005_create_customers::Migration),
            Box::new(m20250101_000006_create_bookings::Migration),
            Box::new(m20250101_000007_create_payments::Migration),
        ]
    }
}

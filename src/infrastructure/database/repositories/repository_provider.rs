//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::customer::CustomerRepository;
use crate::domain::fee::FeeRepository;
use crate::domain::hold::HoldRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::rate_plan::RatePlanRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::season::SeasonRepository;
use crate::domain::unit::UnitRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::customer_repository::SeaOrmCustomerRepository;
use super::hold_repository::SeaOrmHoldRepository;
use super::payment_repository::SeaOrmPaymentRepository;
use super::rate_plan_repository::SeaOrmRatePlanRepository;
use super::season_repository::{SeaOrmFeeRepository, SeaOrmSeasonRepository};
use super::unit_repository::SeaOrmUnitRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let unit = repos.units().find_by_slug("trailer-03").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    units: SeaOrmUnitRepository,
    rate_plans: SeaOrmRatePlanRepository,
    seasons: SeaOrmSeasonRepository,
    fees: SeaOrmFeeRepository,
    holds: SeaOrmHoldRepository,
    customers: SeaOrmCustomerRepository,
    bookings: SeaOrmBookingRepository,
    payments: SeaOrmPaymentRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            units: SeaOrmUnitRepository::new(db.clone()),
            rate_plans: SeaOrmRatePlanRepository::new(db.clone()),
            seasons: SeaOrmSeasonRepository::new(db.clone()),
            fees: SeaOrmFeeRepository::new(db.clone()),
            holds: SeaOrmHoldRepository::new(db.clone()),
            customers: SeaOrmCustomerRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn units(&self) -> &dyn UnitRepository {
        &self.units
    }

    fn rate_plans(&self) -> &dyn RatePlanRepository {
        &self.rate_plans
    }

    fn seasons(&self) -> &dyn SeasonRepository {
        &self.seasons
    }

    fn fees(&self) -> &dyn FeeRepository {
        &self.fees
    }

    fn holds(&self) -> &dyn HoldRepository {
        &self.holds
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }
}

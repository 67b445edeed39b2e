//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::booking::BookingRepository;
use super::customer::CustomerRepository;
use super::fee::FeeRepository;
use super::hold::HoldRepository;
use super::payment::PaymentRepository;
use super::rate_plan::RatePlanRepository;
use super::season::SeasonRepository;
use super::unit::UnitRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let unit = repos.units().find_by_slug("cottage-9606").await?;
///     let holds = repos.holds().find_live_for_unit(&unit.id, from, to, Utc::now()).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn units(&self) -> &dyn UnitRepository;
    fn rate_plans(&self) -> &dyn RatePlanRepository;
    fn seasons(&self) -> &dyn SeasonRepository;
    fn fees(&self) -> &dyn FeeRepository;
    fn holds(&self) -> &dyn HoldRepository;
    fn customers(&self) -> &dyn CustomerRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn payments(&self) -> &dyn PaymentRepository;
}

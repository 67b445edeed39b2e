//! Rate plan repository interface

use async_trait::async_trait;

use super::model::RatePlan;
use crate::domain::unit::UnitType;
use crate::domain::DomainResult;

#[async_trait]
pub trait RatePlanRepository: Send + Sync {
    async fn save(&self, plan: RatePlan) -> DomainResult<()>;

    /// Plan attached directly to a unit
    async fn find_for_unit(&self, unit_id: &str) -> DomainResult<Option<RatePlan>>;

    /// Category plan (no unit) for a unit type
    async fn find_for_category(&self, category: UnitType) -> DomainResult<Option<RatePlan>>;
}

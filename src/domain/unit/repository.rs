//! Unit repository interface

use async_trait::async_trait;

use super::model::{Unit, UnitType};
use crate::domain::DomainResult;

#[async_trait]
pub trait UnitRepository: Send + Sync {
    /// Insert a new unit
    async fn save(&self, unit: Unit) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Unit>>;

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Unit>>;

    /// All units ordered by slug; inactive units included
    async fn find_all(&self) -> DomainResult<Vec<Unit>>;

    /// Active units of a type ordered by slug
    async fn find_active_by_type(&self, unit_type: UnitType) -> DomainResult<Vec<Unit>>;

    async fn count(&self) -> DomainResult<u64>;
}

//! Fee repository interface

use async_trait::async_trait;

use super::model::Fee;
use crate::domain::DomainResult;

#[async_trait]
pub trait FeeRepository: Send + Sync {
    async fn save(&self, fee: Fee) -> DomainResult<()>;

    /// All fees ordered by name
    async fn find_all(&self) -> DomainResult<Vec<Fee>>;
}

//! Hold repository interface

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::model::Hold;
use crate::domain::DomainResult;

#[async_trait]
pub trait HoldRepository: Send + Sync {
    async fn save(&self, hold: Hold) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Hold>>;

    /// Persist status/updated_at changes
    async fn update(&self, hold: Hold) -> DomainResult<()>;

    /// ACTIVE holds on the unit with `expires_at > now` whose dates touch
    /// `[from, to)`. Callers apply the exact overlap test.
    async fn find_live_for_unit(
        &self,
        unit_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Hold>>;
}

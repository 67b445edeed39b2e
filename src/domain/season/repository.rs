//! Season repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::Season;
use crate::domain::DomainResult;

#[async_trait]
pub trait SeasonRepository: Send + Sync {
    async fn save(&self, season: Season) -> DomainResult<()>;

    /// All seasons ordered by start date
    async fn find_all(&self) -> DomainResult<Vec<Season>>;

    /// Seasons with `start_date <= check_out` and `end_date >= check_in`
    async fn find_touching(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> DomainResult<Vec<Season>>;
}

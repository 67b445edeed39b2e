//! Hold placement and release

use std::sync::Arc;

use chrono::{Duration, Utc};
use log::info;

use super::availability::AvailabilityService;
use super::locks::UnitLocks;
use crate::domain::{DomainError, DomainResult, Hold, RepositoryProvider, StayRange};

/// Bounds for the hold lifetime, in minutes
#[derive(Debug, Clone, Copy)]
pub struct HoldSettings {
    pub default_minutes: i64,
    pub min_minutes: i64,
    pub max_minutes: i64,
}

impl Default for HoldSettings {
    fn default() -> Self {
        Self {
            default_minutes: 15,
            min_minutes: 5,
            max_minutes: 60,
        }
    }
}

pub struct HoldService {
    repos: Arc<dyn RepositoryProvider>,
    availability: Arc<AvailabilityService>,
    locks: UnitLocks,
    settings: HoldSettings,
}

impl HoldService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        availability: Arc<AvailabilityService>,
        locks: UnitLocks,
        settings: HoldSettings,
    ) -> Self {
        Self {
            repos,
            availability,
            locks,
            settings,
        }
    }

    pub fn settings(&self) -> HoldSettings {
        self.settings
    }

    /// Place an ACTIVE hold if the unit is free for the stay.
    pub async fn create(
        &self,
        unit_id: &str,
        stay: StayRange,
        expiration_minutes: Option<i64>,
    ) -> DomainResult<Hold> {
        let minutes = expiration_minutes.unwrap_or(self.settings.default_minutes);
        if minutes < self.settings.min_minutes || minutes > self.settings.max_minutes {
            return Err(DomainError::Validation(format!(
                "Hold expiration must be between {} and {} minutes",
                self.settings.min_minutes, self.settings.max_minutes
            )));
        }

        let unit = self.availability.unit(unit_id).await?;
        if !unit.active {
            return Err(DomainError::Validation(format!(
                "{} is not open for booking",
                unit.name
            )));
        }

        let _guard = self.locks.lock(&unit.id).await;
        let report = self.availability.check_excluding(&unit.id, stay, None).await?;
        if !report.available {
            return Err(DomainError::Conflict(format!(
                "Unit is not available for the selected dates ({})",
                report.conflicts.join(", ")
            )));
        }

        let hold = Hold::new(&unit.id, stay, Duration::minutes(minutes));
        self.repos.holds().save(hold.clone()).await?;
        metrics::counter!("holds_created_total").increment(1);
        info!(
            "Hold {} placed on {} for {} - {} (expires {})",
            hold.id, unit.slug, stay.check_in, stay.check_out, hold.expires_at
        );
        Ok(hold)
    }

    /// Fetch a hold. The caller reads its state through `effective_status`.
    pub async fn get(&self, id: &str) -> DomainResult<Hold> {
        self.repos
            .holds()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Hold", "id", id))
    }

    /// Release a hold. Releasing an already released or lapsed hold is a no-op.
    ///
    /// Runs under the unit lock so a booking cannot convert the hold between
    /// the read and the write.
    pub async fn release(&self, id: &str) -> DomainResult<Hold> {
        let unit_id = self.get(id).await?.unit_id;
        let _guard = self.locks.lock(&unit_id).await;
        let mut hold = self.get(id).await?;
        if hold.cancel(Utc::now())? {
            self.repos.holds().update(hold.clone()).await?;
            info!("Hold {} released", hold.id);
        }
        Ok(hold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HoldStatus, Unit};
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::seed::seed_catalog;
    use crate::infrastructure::database::test_database;
    use chrono::NaiveDate;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, m, day).unwrap()
    }

    fn stay() -> StayRange {
        StayRange::new(d(4, 1), d(4, 5)).unwrap()
    }

    async fn setup() -> (Arc<dyn RepositoryProvider>, Arc<HoldService>, Unit) {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(test_database().await));
        seed_catalog(repos.as_ref()).await.unwrap();
        let availability = Arc::new(AvailabilityService::new(repos.clone()));
        let service = HoldService::new(
            repos.clone(),
            availability,
            UnitLocks::new(),
            HoldSettings::default(),
        );
        let unit = repos.units().find_by_slug("cottage-9612").await.unwrap().unwrap();
        (repos, Arc::new(service), unit)
    }

    #[tokio::test]
    async fn hold_blocks_second_hold() {
        let (_, service, unit) = setup().await;
        let hold = service.create(&unit.id, stay(), None).await.unwrap();
        let ttl = hold.expires_at - hold.created_at;
        assert_eq!(ttl.num_minutes(), 15);

        let err = service.create(&unit.id, stay(), None).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn expiration_bounds_are_enforced() {
        let (_, service, unit) = setup().await;
        for minutes in [4, 61] {
            let err = service.create(&unit.id, stay(), Some(minutes)).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert!(service.create(&unit.id, stay(), Some(60)).await.is_ok());
    }

    #[tokio::test]
    async fn concurrent_holds_only_one_wins() {
        let (_, service, unit) = setup().await;
        let a = {
            let service = service.clone();
            let id = unit.id.clone();
            tokio::spawn(async move { service.create(&id, stay(), None).await })
        };
        let b = {
            let service = service.clone();
            let id = unit.id.clone();
            tokio::spawn(async move { service.create(&id, stay(), None).await })
        };
        let results = [a.await.unwrap(), b.await.unwrap()];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    }

    #[tokio::test]
    async fn release_is_idempotent_and_frees_dates() {
        let (_, service, unit) = setup().await;
        let hold = service.create(&unit.id, stay(), None).await.unwrap();

        let released = service.release(&hold.id).await.unwrap();
        assert_eq!(released.status, HoldStatus::Cancelled);
        let again = service.release(&hold.id).await.unwrap();
        assert_eq!(again.status, HoldStatus::Cancelled);

        assert!(service.create(&unit.id, stay(), None).await.is_ok());
    }

    #[tokio::test]
    async fn converted_hold_cannot_be_released() {
        let (repos, service, unit) = setup().await;
        let mut hold = service.create(&unit.id, stay(), None).await.unwrap();
        hold.convert(Utc::now()).unwrap();
        repos.holds().update(hold.clone()).await.unwrap();

        let err = service.release(&hold.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(service.get(&hold.id).await.unwrap().status, HoldStatus::Converted);
    }

    #[tokio::test]
    async fn lapsed_hold_reads_expired() {
        let (repos, service, unit) = setup().await;
        let lapsed = Hold::new(&unit.id, stay(), Duration::minutes(-5));
        repos.holds().save(lapsed.clone()).await.unwrap();

        let fetched = service.get(&lapsed.id).await.unwrap();
        assert_eq!(fetched.status, HoldStatus::Active);
        assert_eq!(fetched.effective_status(Utc::now()), HoldStatus::Expired);
        assert!(service.create(&unit.id, stay(), None).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_hold_is_not_found() {
        let (_, service, _) = setup().await;
        assert!(matches!(
            service.release("nope").await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn inactive_unit_cannot_be_held() {
        let (repos, service, _) = setup().await;
        let closed = repos.units().find_by_slug("cottage-9614").await.unwrap().unwrap();
        assert!(matches!(
            service.create(&closed.id, stay(), None).await.unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}

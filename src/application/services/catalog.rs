//! Unit catalog, rate plan resolution and the season/fee tables

use std::sync::Arc;

use chrono::NaiveDate;
use log::info;

use crate::domain::fee::MAX_FEE_CENTS;
use crate::domain::{
    DomainError, DomainResult, Fee, RatePlan, RepositoryProvider, Season, Unit,
};

/// A unit together with the plan that prices it
#[derive(Debug, Clone)]
pub struct UnitListing {
    pub unit: Unit,
    pub rate_plan: Option<RatePlan>,
    pub confirmed_bookings: u64,
}

/// The unit's own plan if it has one, otherwise its category plan.
pub async fn resolve_rate_plan(
    repos: &dyn RepositoryProvider,
    unit: &Unit,
) -> DomainResult<Option<RatePlan>> {
    if let Some(plan) = repos.rate_plans().find_for_unit(&unit.id).await? {
        return Ok(Some(plan));
    }
    repos.rate_plans().find_for_category(unit.unit_type).await
}

pub struct CatalogService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list_units(&self) -> DomainResult<Vec<UnitListing>> {
        let units = self.repos.units().find_all().await?;
        let mut listings = Vec::with_capacity(units.len());
        for unit in units {
            listings.push(self.listing(unit).await?);
        }
        Ok(listings)
    }

    /// Look a unit up by slug, falling back to its id
    pub async fn unit(&self, key: &str) -> DomainResult<Unit> {
        if let Some(unit) = self.repos.units().find_by_slug(key).await? {
            return Ok(unit);
        }
        self.repos
            .units()
            .find_by_id(key)
            .await?
            .ok_or_else(|| DomainError::not_found("Unit", "slug", key))
    }

    pub async fn unit_listing(&self, key: &str) -> DomainResult<UnitListing> {
        let unit = self.unit(key).await?;
        self.listing(unit).await
    }

    async fn listing(&self, unit: Unit) -> DomainResult<UnitListing> {
        let rate_plan = resolve_rate_plan(self.repos.as_ref(), &unit).await?;
        let confirmed_bookings = self
            .repos
            .bookings()
            .count_confirmed_for_unit(&unit.id)
            .await?;
        Ok(UnitListing {
            unit,
            rate_plan,
            confirmed_bookings,
        })
    }

    pub async fn list_seasons(&self) -> DomainResult<Vec<Season>> {
        self.repos.seasons().find_all().await
    }

    pub async fn create_season(
        &self,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        discount_pct: i32,
    ) -> DomainResult<Season> {
        if end_date < start_date {
            return Err(DomainError::Validation(
                "Season end date must not be before its start date".to_string(),
            ));
        }
        if !(0..=100).contains(&discount_pct) {
            return Err(DomainError::Validation(
                "Discount must be between 0 and 100 percent".to_string(),
            ));
        }
        let season = Season::new(name, start_date, end_date, discount_pct);
        self.repos.seasons().save(season.clone()).await?;
        info!(
            "Season '{}' created: {} to {} at {}% off",
            season.name, season.start_date, season.end_date, season.discount_pct
        );
        Ok(season)
    }

    pub async fn list_fees(&self) -> DomainResult<Vec<Fee>> {
        self.repos.fees().find_all().await
    }

    pub async fn create_fee(&self, name: &str, amount: i64, per_stay: bool) -> DomainResult<Fee> {
        if !(0..=MAX_FEE_CENTS).contains(&amount) {
            return Err(DomainError::Validation(format!(
                "Fee amount must be between 0 and {} cents",
                MAX_FEE_CENTS
            )));
        }
        let fee = Fee::new(name, amount, per_stay);
        self.repos.fees().save(fee.clone()).await?;
        info!("Fee '{}' created: {} cents", fee.name, fee.amount);
        Ok(fee)
    }
}

//! Stay quotes for a unit or for the first free unit of a type

use std::sync::Arc;

use log::debug;

use super::availability::AvailabilityService;
use super::catalog::resolve_rate_plan;
use crate::domain::pricing::price_stay;
use crate::domain::{
    DomainError, DomainResult, PriceBreakdown, RepositoryProvider, StayRange, Unit, UnitType,
};

/// A priced stay on a concrete unit
#[derive(Debug, Clone)]
pub struct Quote {
    pub unit: Unit,
    pub stay: StayRange,
    pub guests: i32,
    pub breakdown: PriceBreakdown,
}

pub struct PricingService {
    repos: Arc<dyn RepositoryProvider>,
    availability: Arc<AvailabilityService>,
}

impl PricingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, availability: Arc<AvailabilityService>) -> Self {
        Self {
            repos,
            availability,
        }
    }

    /// Price a stay on a specific unit
    pub async fn quote(&self, unit_id: &str, stay: StayRange, guests: i32) -> DomainResult<Quote> {
        let unit = self.availability.unit(unit_id).await?;
        ensure_bookable(&unit, guests)?;
        let breakdown = self.price_unit(&unit, &stay).await?;
        Ok(Quote {
            unit,
            stay,
            guests,
            breakdown,
        })
    }

    /// Price a stay on the first available active unit of a type
    pub async fn quote_for_type(
        &self,
        unit_type: UnitType,
        stay: StayRange,
        guests: i32,
    ) -> DomainResult<Quote> {
        let unit = self.first_available(unit_type, stay).await?;
        ensure_bookable(&unit, guests)?;
        let breakdown = self.price_unit(&unit, &stay).await?;
        Ok(Quote {
            unit,
            stay,
            guests,
            breakdown,
        })
    }

    /// First active unit of the type, in slug order, that is free for the stay.
    ///
    /// Unlocked, so only good for quotes.
    pub async fn first_available(&self, unit_type: UnitType, stay: StayRange) -> DomainResult<Unit> {
        let units = self.repos.units().find_active_by_type(unit_type).await?;
        if units.is_empty() {
            return Err(DomainError::not_found("Unit", "type", unit_type.as_str()));
        }
        for unit in units {
            let report = self
                .availability
                .check_excluding(&unit.id, stay, None)
                .await?;
            if report.available {
                return Ok(unit);
            }
            debug!("{} taken for {} - {}", unit.slug, stay.check_in, stay.check_out);
        }
        Err(DomainError::Unavailable(format!(
            "No {} units are available for the selected dates",
            unit_type
        )))
    }

    /// Run the pricing engine against the unit's resolved plan.
    pub async fn price_unit(&self, unit: &Unit, stay: &StayRange) -> DomainResult<PriceBreakdown> {
        let plan = resolve_rate_plan(self.repos.as_ref(), unit)
            .await?
            .ok_or_else(|| DomainError::Validation("No rate plan found for this unit".to_string()))?;
        let seasons = self
            .repos
            .seasons()
            .find_touching(stay.check_in, stay.check_out)
            .await?;
        let fees = self.repos.fees().find_all().await?;

        let breakdown = price_stay(&plan, stay, &seasons, &fees)?;
        metrics::counter!("pricing_quotes_total", "tier" => breakdown.tier.as_str()).increment(1);
        Ok(breakdown)
    }
}

pub(crate) fn ensure_bookable(unit: &Unit, guests: i32) -> DomainResult<()> {
    if !unit.active {
        return Err(DomainError::Validation(format!(
            "{} is not open for booking",
            unit.name
        )));
    }
    unit.check_guests(guests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::RateTier;
    use crate::domain::{Booking, Customer, Fee, Season};
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::seed::seed_catalog;
    use crate::infrastructure::database::test_database;
    use chrono::NaiveDate;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, m, day).unwrap()
    }

    fn stay(a: NaiveDate, b: NaiveDate) -> StayRange {
        StayRange::new(a, b).unwrap()
    }

    async fn setup() -> (Arc<dyn RepositoryProvider>, PricingService) {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(test_database().await));
        seed_catalog(repos.as_ref()).await.unwrap();
        let availability = Arc::new(AvailabilityService::new(repos.clone()));
        (repos.clone(), PricingService::new(repos, availability))
    }

    async fn unit(repos: &Arc<dyn RepositoryProvider>, slug: &str) -> Unit {
        repos.units().find_by_slug(slug).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn nightly_quote_with_season_and_fees() {
        let (repos, pricing) = setup().await;
        repos
            .seasons()
            .save(Season::new("Spring", d(3, 1), d(3, 31), 10))
            .await
            .unwrap();
        repos.fees().save(Fee::new("Cleaning", 5000, true)).await.unwrap();
        repos.fees().save(Fee::new("Resort", 300, false)).await.unwrap();

        let cottage = unit(&repos, "cottage-9606").await;
        let quote = pricing.quote(&cottage.id, stay(d(3, 10), d(3, 13)), 2).await.unwrap();
        let b = quote.breakdown;

        assert_eq!(b.nights, 3);
        assert_eq!(b.tier, RateTier::Nightly);
        assert_eq!(b.subtotal, 25500);
        assert_eq!(b.discount_percentage, 10);
        assert_eq!(b.seasonal_discount, 2550);
        assert_eq!(b.season_name.as_deref(), Some("Spring"));
        assert_eq!(b.fees_total, 5900);
        assert_eq!(b.total, 25500 - 2550 + 5900);
    }

    #[tokio::test]
    async fn weekly_tier_applies_from_seven_nights() {
        let (repos, pricing) = setup().await;
        let trailer = unit(&repos, "trailer-03").await;
        let quote = pricing.quote(&trailer.id, stay(d(5, 1), d(5, 10)), 1).await.unwrap();
        assert_eq!(quote.breakdown.tier, RateTier::Weekly);
        assert_eq!(quote.breakdown.subtotal, 27000 + 2 * 4500);
    }

    #[tokio::test]
    async fn too_many_guests_is_rejected() {
        let (repos, pricing) = setup().await;
        let trailer = unit(&repos, "trailer-03").await;
        let err = pricing
            .quote(&trailer.id, stay(d(5, 1), d(5, 3)), 3)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn inactive_unit_cannot_be_priced() {
        let (repos, pricing) = setup().await;
        let closed = unit(&repos, "cottage-9614").await;
        let err = pricing
            .quote(&closed.id, stay(d(5, 1), d(5, 3)), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn type_quote_skips_taken_units() {
        let (repos, pricing) = setup().await;
        let first = unit(&repos, "cottage-9606").await;
        let customer = Customer::from_full_name("Jane Doe", "jane@example.com", None);
        repos.customers().save(customer.clone()).await.unwrap();
        repos
            .bookings()
            .save(Booking::confirmed(&first.id, &customer.id, stay(d(6, 1), d(6, 5)), 2, 1, "USD"))
            .await
            .unwrap();

        let quote = pricing
            .quote_for_type(UnitType::Cottage2Br, stay(d(6, 2), d(6, 4)), 2)
            .await
            .unwrap();
        assert_eq!(quote.unit.slug, "cottage-9618");
    }

    #[tokio::test]
    async fn type_without_units_is_not_found() {
        let (_, pricing) = setup().await;
        let err = pricing
            .quote_for_type(UnitType::RvSite, stay(d(6, 2), d(6, 4)), 2)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}

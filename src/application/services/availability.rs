//! Availability checks and free-range calendar

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::{DomainError, DomainResult, RepositoryProvider, StayRange, Unit};
use crate::shared::dates::short_label;

/// Outcome of an availability check
#[derive(Debug, Clone)]
pub struct AvailabilityReport {
    pub unit_id: String,
    pub stay: StayRange,
    pub available: bool,
    /// `"Jan 5 - Jan 9"` style labels, bookings first, then holds
    pub conflicts: Vec<String>,
    pub conflicting_bookings: Vec<String>,
    pub conflicting_holds: Vec<String>,
}

/// Maximal bookable `[start, end)` range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub struct AvailabilityService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AvailabilityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub(crate) async fn unit(&self, unit_id: &str) -> DomainResult<Unit> {
        self.repos
            .units()
            .find_by_id(unit_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Unit", "id", unit_id))
    }

    /// Check a stay against confirmed bookings and live holds.
    pub async fn check(&self, unit_id: &str, stay: StayRange) -> DomainResult<AvailabilityReport> {
        self.unit(unit_id).await?;
        self.check_excluding(unit_id, stay, None).await
    }

    /// Same as [`check`](Self::check) but ignores one hold, the one a
    /// booking is about to consume. Does not verify the unit exists.
    pub(crate) async fn check_excluding(
        &self,
        unit_id: &str,
        stay: StayRange,
        exclude_hold: Option<&str>,
    ) -> DomainResult<AvailabilityReport> {
        let bookings = self
            .repos
            .bookings()
            .find_confirmed_for_unit(unit_id, stay.check_in, stay.check_out)
            .await?;
        let holds = self
            .repos
            .holds()
            .find_live_for_unit(unit_id, stay.check_in, stay.check_out, Utc::now())
            .await?;

        let mut conflicts = Vec::new();
        let mut conflicting_bookings = Vec::new();
        let mut conflicting_holds = Vec::new();

        for booking in bookings
            .iter()
            .filter(|b| stay.conflicts_with(b.check_in, b.check_out))
        {
            conflicts.push(range_label(booking.check_in, booking.check_out));
            conflicting_bookings.push(booking.id.clone());
        }
        for hold in holds
            .iter()
            .filter(|h| Some(h.id.as_str()) != exclude_hold)
            .filter(|h| stay.conflicts_with(h.check_in, h.check_out))
        {
            conflicts.push(range_label(hold.check_in, hold.check_out));
            conflicting_holds.push(hold.id.clone());
        }

        Ok(AvailabilityReport {
            unit_id: unit_id.to_string(),
            stay,
            available: conflicts.is_empty(),
            conflicts,
            conflicting_bookings,
            conflicting_holds,
        })
    }

    /// Free ranges of the unit inside `[start, end)`.
    pub async fn calendar(
        &self,
        unit_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<FreeRange>> {
        if end <= start {
            return Err(DomainError::Validation(
                "End date must be after start date".to_string(),
            ));
        }
        self.unit(unit_id).await?;

        let mut blocked: Vec<(NaiveDate, NaiveDate)> = self
            .repos
            .bookings()
            .find_confirmed_for_unit(unit_id, start, end)
            .await?
            .into_iter()
            .map(|b| (b.check_in, b.check_out))
            .collect();
        blocked.extend(
            self.repos
                .holds()
                .find_live_for_unit(unit_id, start, end, Utc::now())
                .await?
                .into_iter()
                .map(|h| (h.check_in, h.check_out)),
        );

        Ok(free_ranges(start, end, blocked))
    }
}

fn range_label(check_in: NaiveDate, check_out: NaiveDate) -> String {
    format!("{} - {}", short_label(check_in), short_label(check_out))
}

/// Sweep the blocked intervals in check-in order, emitting the gaps.
fn free_ranges(
    start: NaiveDate,
    end: NaiveDate,
    mut blocked: Vec<(NaiveDate, NaiveDate)>,
) -> Vec<FreeRange> {
    blocked.sort();
    let mut free = Vec::new();
    let mut cursor = start;
    for (from, to) in blocked {
        if from > cursor {
            free.push(FreeRange {
                start: cursor,
                end: from.min(end),
            });
        }
        cursor = cursor.max(to);
        if cursor >= end {
            return free;
        }
    }
    if cursor < end {
        free.push(FreeRange { start: cursor, end });
    }
    free
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Booking, Customer, Hold};
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::seed::seed_catalog;
    use crate::infrastructure::database::test_database;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, m, day).unwrap()
    }

    fn stay(a: NaiveDate, b: NaiveDate) -> StayRange {
        StayRange::new(a, b).unwrap()
    }

    async fn setup() -> (Arc<dyn RepositoryProvider>, AvailabilityService, Unit) {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(test_database().await));
        seed_catalog(repos.as_ref()).await.unwrap();
        let unit = repos.units().find_by_slug("cottage-9606").await.unwrap().unwrap();
        (repos.clone(), AvailabilityService::new(repos), unit)
    }

    async fn book(repos: &Arc<dyn RepositoryProvider>, unit: &Unit, a: NaiveDate, b: NaiveDate) -> Booking {
        let customer = Customer::from_full_name("Jane Doe", format!("{}@example.com", a), None);
        repos.customers().save(customer.clone()).await.unwrap();
        let booking = Booking::confirmed(&unit.id, &customer.id, stay(a, b), 2, 10000, "USD");
        repos.bookings().save(booking.clone()).await.unwrap();
        booking
    }

    #[test]
    fn sweep_produces_gaps() {
        let free = free_ranges(
            d(1, 1),
            d(1, 31),
            vec![(d(1, 10), d(1, 15)), (d(1, 3), d(1, 5)), (d(1, 12), d(1, 20))],
        );
        assert_eq!(
            free,
            vec![
                FreeRange { start: d(1, 1), end: d(1, 3) },
                FreeRange { start: d(1, 5), end: d(1, 10) },
                FreeRange { start: d(1, 20), end: d(1, 31) },
            ]
        );
    }

    #[test]
    fn sweep_clamps_to_window() {
        let free = free_ranges(d(1, 10), d(1, 20), vec![(d(1, 5), d(1, 12)), (d(1, 18), d(1, 25))]);
        assert_eq!(free, vec![FreeRange { start: d(1, 12), end: d(1, 18) }]);
        assert!(free_ranges(d(1, 10), d(1, 20), vec![(d(1, 1), d(2, 1))]).is_empty());
    }

    #[tokio::test]
    async fn free_unit_is_available() {
        let (_, service, unit) = setup().await;
        let report = service.check(&unit.id, stay(d(3, 1), d(3, 5))).await.unwrap();
        assert!(report.available);
        assert!(report.conflicts.is_empty());
    }

    #[tokio::test]
    async fn overlapping_booking_conflicts_with_label() {
        let (repos, service, unit) = setup().await;
        let booking = book(&repos, &unit, d(1, 5), d(1, 9)).await;

        let report = service.check(&unit.id, stay(d(1, 7), d(1, 12))).await.unwrap();
        assert!(!report.available);
        assert_eq!(report.conflicts, vec!["Jan 5 - Jan 9".to_string()]);
        assert_eq!(report.conflicting_bookings, vec![booking.id]);
    }

    #[tokio::test]
    async fn back_to_back_is_available() {
        let (repos, service, unit) = setup().await;
        book(&repos, &unit, d(1, 5), d(1, 9)).await;
        let report = service.check(&unit.id, stay(d(1, 9), d(1, 12))).await.unwrap();
        assert!(report.available);
    }

    #[tokio::test]
    async fn live_hold_blocks_unless_excluded() {
        let (repos, service, unit) = setup().await;
        let hold = Hold::new(&unit.id, stay(d(2, 1), d(2, 4)), chrono::Duration::minutes(15));
        repos.holds().save(hold.clone()).await.unwrap();

        let report = service.check(&unit.id, stay(d(2, 1), d(2, 4))).await.unwrap();
        assert_eq!(report.conflicting_holds, vec![hold.id.clone()]);

        let report = service
            .check_excluding(&unit.id, stay(d(2, 1), d(2, 4)), Some(&hold.id))
            .await
            .unwrap();
        assert!(report.available);
    }

    #[tokio::test]
    async fn expired_hold_does_not_block() {
        let (repos, service, unit) = setup().await;
        let hold = Hold::new(&unit.id, stay(d(2, 1), d(2, 4)), chrono::Duration::minutes(-1));
        repos.holds().save(hold).await.unwrap();
        let report = service.check(&unit.id, stay(d(2, 1), d(2, 4))).await.unwrap();
        assert!(report.available);
    }

    #[tokio::test]
    async fn unknown_unit_is_not_found() {
        let (_, service, _) = setup().await;
        let err = service.check("missing", stay(d(2, 1), d(2, 4))).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn calendar_skips_booked_nights() {
        let (repos, service, unit) = setup().await;
        book(&repos, &unit, d(1, 5), d(1, 9)).await;
        let free = service.calendar(&unit.id, d(1, 1), d(1, 15)).await.unwrap();
        assert_eq!(
            free,
            vec![
                FreeRange { start: d(1, 1), end: d(1, 5) },
                FreeRange { start: d(1, 9), end: d(1, 15) },
            ]
        );
    }
}

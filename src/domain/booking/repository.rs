//! Booking repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Booking, BookingStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn save(&self, booking: Booking) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>>;

    /// Set status; returns the updated booking or NotFound
    async fn update_status(&self, id: &str, status: BookingStatus) -> DomainResult<Booking>;

    /// CONFIRMED bookings on the unit whose dates touch `[from, to)`.
    /// Callers apply the exact overlap test.
    async fn find_confirmed_for_unit(
        &self,
        unit_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<Booking>>;

    /// Bookings ordered by check-in, optionally limited to those touching `[from, to)`
    async fn find_all(
        &self,
        window: Option<(NaiveDate, NaiveDate)>,
    ) -> DomainResult<Vec<Booking>>;

    async fn count_confirmed_for_unit(&self, unit_id: &str) -> DomainResult<u64>;
}

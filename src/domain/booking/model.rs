//! Booking domain entity

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::stay::StayRange;
use crate::shared::errors::DomainError;

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    /// Paid or accepted; blocks the unit's dates
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Invalid booking status '{}'", s)))
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A guest's reservation of a unit
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: String,
    pub unit_id: String,
    pub customer_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    /// Price total in cents at the time of booking
    pub total_cents: i64,
    pub currency: String,
    pub guests: i32,
    /// Guest's special requests
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn confirmed(
        unit_id: impl Into<String>,
        customer_id: impl Into<String>,
        stay: StayRange,
        guests: i32,
        total_cents: i64,
        currency: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            unit_id: unit_id.into(),
            customer_id: customer_id.into(),
            check_in: stay.check_in,
            check_out: stay.check_out,
            status: BookingStatus::Confirmed,
            total_cents,
            currency: currency.into(),
            guests,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Only confirmed bookings block availability
    pub fn blocks_dates(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay() -> StayRange {
        StayRange::new(
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 8).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_booking_is_confirmed_and_blocks() {
        let b = Booking::confirmed("u1", "c1", stay(), 2, 27000, "USD");
        assert_eq!(b.status, BookingStatus::Confirmed);
        assert!(b.blocks_dates());
        assert_eq!(b.nights(), 7);
    }

    #[test]
    fn cancelled_booking_does_not_block() {
        let mut b = Booking::confirmed("u1", "c1", stay(), 2, 27000, "USD");
        b.status = BookingStatus::Cancelled;
        assert!(!b.blocks_dates());
    }

    #[test]
    fn status_parse() {
        for s in BookingStatus::ALL {
            assert_eq!(s.as_str().parse::<BookingStatus>().unwrap(), s);
        }
        assert!("confirmed".parse::<BookingStatus>().is_err());
    }
}

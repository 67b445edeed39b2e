//! Stay date range value object

use chrono::NaiveDate;

use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// Longest bookable stay. Keeps every cents computation far inside `i64`.
pub const MAX_STAY_NIGHTS: i64 = 730;

/// A half-open `[check_in, check_out)` range of nights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayRange {
    /// Build a stay, rejecting ranges with zero or negative nights and
    /// stays longer than [`MAX_STAY_NIGHTS`].
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<Self> {
        if check_out <= check_in {
            return Err(DomainError::Validation(
                "Check-out date must be after check-in date".to_string(),
            ));
        }
        if (check_out - check_in).num_days() > MAX_STAY_NIGHTS {
            return Err(DomainError::Validation(format!(
                "Stays are limited to {} nights",
                MAX_STAY_NIGHTS
            )));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Interval overlap test used for bookings and holds.
    ///
    /// `other` conflicts when it covers our check-in, covers our check-out,
    /// or sits entirely inside this stay. Back-to-back stays (one checks out
    /// the day the other checks in) do not conflict.
    pub fn conflicts_with(&self, other_in: NaiveDate, other_out: NaiveDate) -> bool {
        (other_in <= self.check_in && other_out > self.check_in)
            || (other_in < self.check_out && other_out >= self.check_out)
            || (other_in >= self.check_in && other_out <= self.check_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    fn stay() -> StayRange {
        StayRange::new(d(3, 10), d(3, 15)).unwrap()
    }

    #[test]
    fn nights_counts_calendar_days() {
        assert_eq!(stay().nights(), 5);
        assert_eq!(StayRange::new(d(1, 31), d(2, 1)).unwrap().nights(), 1);
    }

    #[test]
    fn same_day_checkout_is_rejected() {
        let err = StayRange::new(d(3, 10), d(3, 10)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(m) if m.contains("after check-in")));
        assert!(StayRange::new(d(3, 10), d(3, 9)).is_err());
    }

    #[test]
    fn overlong_stay_is_rejected() {
        let check_in = d(1, 1);
        assert!(StayRange::new(check_in, check_in + chrono::Duration::days(MAX_STAY_NIGHTS)).is_ok());
        let err = StayRange::new(check_in, check_in + chrono::Duration::days(MAX_STAY_NIGHTS + 1))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(m) if m.contains("730 nights")));
    }

    #[test]
    fn covering_check_in_conflicts() {
        assert!(stay().conflicts_with(d(3, 8), d(3, 11)));
    }

    #[test]
    fn covering_check_out_conflicts() {
        assert!(stay().conflicts_with(d(3, 14), d(3, 20)));
    }

    #[test]
    fn nested_range_conflicts() {
        assert!(stay().conflicts_with(d(3, 11), d(3, 13)));
        assert!(stay().conflicts_with(d(3, 1), d(3, 30)));
        assert!(stay().conflicts_with(d(3, 10), d(3, 15)));
    }

    #[test]
    fn back_to_back_stays_do_not_conflict() {
        assert!(!stay().conflicts_with(d(3, 5), d(3, 10)));
        assert!(!stay().conflicts_with(d(3, 15), d(3, 18)));
    }

    #[test]
    fn disjoint_ranges_do_not_conflict() {
        assert!(!stay().conflicts_with(d(4, 1), d(4, 5)));
        assert!(!stay().conflicts_with(d(2, 1), d(2, 5)));
    }
}

//! Season domain entity

use chrono::NaiveDate;

use crate::domain::stay::StayRange;

/// Named date range (inclusive on both ends) carrying a discount
#[derive(Debug, Clone)]
pub struct Season {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whole percent, 0..=100
    pub discount_pct: i32,
}

impl Season {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        discount_pct: i32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            start_date,
            end_date,
            discount_pct: discount_pct.clamp(0, 100),
        }
    }

    /// A season touches a stay if it starts by check-out and ends on or after check-in.
    pub fn touches(&self, stay: &StayRange) -> bool {
        self.start_date <= stay.check_out && self.end_date >= stay.check_in
    }
}

/// Pick the season with the highest discount among those touching the stay.
pub fn best_season<'a>(seasons: &'a [Season], stay: &StayRange) -> Option<&'a Season> {
    seasons
        .iter()
        .filter(|s| s.touches(stay))
        .max_by_key(|s| s.discount_pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn discount_is_clamped() {
        assert_eq!(Season::new("x", d(1, 1), d(1, 2), 150).discount_pct, 100);
        assert_eq!(Season::new("x", d(1, 1), d(1, 2), -5).discount_pct, 0);
    }

    #[test]
    fn touching_is_inclusive_at_both_edges() {
        let stay = StayRange::new(d(3, 10), d(3, 15)).unwrap();
        assert!(Season::new("ends on check-in", d(3, 1), d(3, 10), 5).touches(&stay));
        assert!(Season::new("starts on check-out", d(3, 15), d(3, 31), 5).touches(&stay));
        assert!(!Season::new("before", d(2, 1), d(3, 9), 5).touches(&stay));
        assert!(!Season::new("after", d(3, 16), d(4, 1), 5).touches(&stay));
    }

    #[test]
    fn highest_discount_wins() {
        let stay = StayRange::new(d(12, 20), d(12, 28)).unwrap();
        let seasons = vec![
            Season::new("Winter", d(12, 1), d(12, 31), 10),
            Season::new("Holidays", d(12, 24), d(12, 26), 20),
            Season::new("Summer", d(6, 1), d(8, 31), 50),
        ];
        assert_eq!(best_season(&seasons, &stay).unwrap().name, "Holidays");
    }

    #[test]
    fn no_season_when_none_touch() {
        let stay = StayRange::new(d(5, 1), d(5, 3)).unwrap();
        assert!(best_season(&[], &stay).is_none());
    }
}

//! Unit domain entity

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::shared::errors::DomainError;

/// Kind of rentable unit. Category rate plans are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    /// 5th-wheel trailer
    Trailer,
    /// One-bedroom cottage (or studio)
    Cottage1Br,
    /// Two-bedroom cottage
    Cottage2Br,
    /// Bare RV pad
    RvSite,
}

impl UnitType {
    pub const ALL: [UnitType; 4] = [
        UnitType::Trailer,
        UnitType::Cottage1Br,
        UnitType::Cottage2Br,
        UnitType::RvSite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trailer => "TRAILER",
            Self::Cottage1Br => "COTTAGE_1BR",
            Self::Cottage2Br => "COTTAGE_2BR",
            Self::RvSite => "RV_SITE",
        }
    }
}

impl FromStr for UnitType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unknown unit type '{}'", s)))
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rentable unit (cottage, trailer, RV pad)
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: String,
    /// URL-safe unique key, e.g. `cottage-9606`
    pub slug: String,
    pub name: String,
    pub unit_type: UnitType,
    /// Maximum number of guests
    pub capacity: i32,
    pub beds: Option<i32>,
    pub baths: Option<f64>,
    pub amenities: Vec<String>,
    pub features: Vec<String>,
    pub photos: Vec<String>,
    /// Inactive units are listed but cannot be priced or booked
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Unit {
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        unit_type: UnitType,
        capacity: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            slug: slug.into(),
            name: name.into(),
            unit_type,
            capacity,
            beds: None,
            baths: None,
            amenities: Vec::new(),
            features: Vec::new(),
            photos: Vec::new(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reject parties larger than the unit sleeps
    pub fn check_guests(&self, guests: i32) -> Result<(), DomainError> {
        if guests < 1 {
            return Err(DomainError::Validation(
                "At least one guest is required".to_string(),
            ));
        }
        if guests > self.capacity {
            return Err(DomainError::Validation(format!(
                "{} sleeps at most {} guests",
                self.name, self.capacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_type_roundtrip() {
        for t in UnitType::ALL {
            assert_eq!(t.as_str().parse::<UnitType>().unwrap(), t);
        }
    }

    #[test]
    fn unknown_unit_type_is_validation_error() {
        let err = "CASTLE".parse::<UnitType>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_unit_is_active_with_fresh_id() {
        let a = Unit::new("trailer-03", "5th Wheel Trailer #3", UnitType::Trailer, 2);
        let b = Unit::new("trailer-05", "5th Wheel Trailer #5", UnitType::Trailer, 2);
        assert!(a.active);
        assert_ne!(a.id, b.id);
        assert!(a.amenities.is_empty());
    }

    #[test]
    fn guest_count_is_bounded_by_capacity() {
        let u = Unit::new("cottage-9606", "Cottage 9606", UnitType::Cottage2Br, 4);
        assert!(u.check_guests(4).is_ok());
        assert!(u.check_guests(5).is_err());
        assert!(u.check_guests(0).is_err());
    }
}

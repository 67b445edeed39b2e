//! Fee domain entity

use crate::shared::errors::DomainError;

/// Largest accepted fee amount (cents)
pub const MAX_FEE_CENTS: i64 = 100_000_000;

/// Flat surcharge added to every stay
#[derive(Debug, Clone)]
pub struct Fee {
    pub id: String,
    pub name: String,
    /// Cents
    pub amount: i64,
    /// Charged once per stay when true, once per night otherwise
    pub per_stay: bool,
}

impl Fee {
    pub fn new(name: impl Into<String>, amount: i64, per_stay: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            amount,
            per_stay,
        }
    }

    /// Charge for a stay of `nights`. Fails instead of wrapping on overflow.
    pub fn amount_for(&self, nights: i64) -> Result<i64, DomainError> {
        if self.per_stay {
            Ok(self.amount)
        } else {
            self.amount.checked_mul(nights).ok_or_else(|| {
                DomainError::Validation(format!("Fee '{}' is too large for this stay", self.name))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_stay_fee_ignores_nights() {
        assert_eq!(Fee::new("Cleaning", 5000, true).amount_for(9).unwrap(), 5000);
    }

    #[test]
    fn per_night_fee_scales() {
        assert_eq!(Fee::new("Resort", 300, false).amount_for(4).unwrap(), 1200);
    }

    #[test]
    fn overflowing_per_night_fee_is_an_error() {
        let fee = Fee::new("Huge", i64::MAX / 2, false);
        assert!(matches!(fee.amount_for(3), Err(DomainError::Validation(_))));
    }
}

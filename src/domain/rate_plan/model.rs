//! Rate plan domain entity

use crate::domain::unit::UnitType;
use crate::shared::errors::DomainError;

/// What a rate plan is attached to. A plan belongs to exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatePlanScope {
    /// Overrides the category plan for one unit
    Unit(String),
    /// Default plan for every unit of a type
    Category(UnitType),
}

/// Length-of-stay price tiers, in cents
#[derive(Debug, Clone)]
pub struct RatePlan {
    pub id: String,
    pub scope: RatePlanScope,
    pub nightly: Option<i64>,
    /// Price of a 7-night block
    pub weekly: Option<i64>,
    /// Price of a 30-night block
    pub monthly: Option<i64>,
    /// Price of a 120-night block
    pub four_month: Option<i64>,
    pub currency: String,
}

impl RatePlan {
    pub fn new(scope: RatePlanScope, nightly: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            scope,
            nightly: Some(nightly),
            weekly: None,
            monthly: None,
            four_month: None,
            currency: "USD".to_string(),
        }
    }

    pub fn with_tiers(mut self, weekly: Option<i64>, monthly: Option<i64>, four_month: Option<i64>) -> Self {
        self.weekly = weekly;
        self.monthly = monthly;
        self.four_month = four_month;
        self
    }

    pub fn unit_id(&self) -> Option<&str> {
        match &self.scope {
            RatePlanScope::Unit(id) => Some(id),
            RatePlanScope::Category(_) => None,
        }
    }

    pub fn category(&self) -> Option<UnitType> {
        match self.scope {
            RatePlanScope::Category(t) => Some(t),
            RatePlanScope::Unit(_) => None,
        }
    }

    /// Rebuild the scope from the two nullable storage columns.
    pub fn scope_from_columns(
        unit_id: Option<String>,
        category: Option<UnitType>,
    ) -> Result<RatePlanScope, DomainError> {
        match (unit_id, category) {
            (Some(id), None) => Ok(RatePlanScope::Unit(id)),
            (None, Some(t)) => Ok(RatePlanScope::Category(t)),
            _ => Err(DomainError::Validation(
                "Rate plan must belong to exactly one of unit or category".to_string(),
            )),
        }
    }
}

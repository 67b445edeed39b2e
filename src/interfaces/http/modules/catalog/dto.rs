//! Season and fee DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Fee, Season};

#[derive(Debug, Serialize, ToSchema)]
pub struct SeasonDto {
    pub id: String,
    pub name: String,
    pub start_date: String,
    /// Inclusive
    pub end_date: String,
    pub discount_pct: i32,
}

impl From<Season> for SeasonDto {
    fn from(s: Season) -> Self {
        Self {
            id: s.id,
            name: s.name,
            start_date: s.start_date.to_string(),
            end_date: s.end_date.to_string(),
            discount_pct: s.discount_pct,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSeasonRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    #[validate(range(min = 0, max = 100))]
    pub discount_pct: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeeDto {
    pub id: String,
    pub name: String,
    /// Cents
    pub amount: i64,
    /// Charged once per stay when true, per night otherwise
    pub per_stay: bool,
}

impl From<Fee> for FeeDto {
    fn from(f: Fee) -> Self {
        Self {
            id: f.id,
            name: f.name,
            amount: f.amount,
            per_stay: f.per_stay,
        }
    }
}

fn default_per_stay() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFeeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Cents, at most 100,000,000
    #[validate(range(min = 0, max = 100_000_000))]
    pub amount: i64,
    #[serde(default = "default_per_stay")]
    pub per_stay: bool,
}

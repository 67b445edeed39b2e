//! Unit catalog DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::services::{FreeRange, UnitListing};
use crate::domain::{RatePlan, Unit};

/// Rate plan as applied to a unit (cents)
#[derive(Debug, Serialize, ToSchema)]
pub struct RatePlanDto {
    pub id: String,
    /// Set for a unit-specific plan
    pub unit_id: Option<String>,
    /// Set for a category-wide plan
    pub category: Option<String>,
    pub nightly: Option<i64>,
    pub weekly: Option<i64>,
    pub monthly: Option<i64>,
    pub four_month: Option<i64>,
    pub currency: String,
}

impl From<&RatePlan> for RatePlanDto {
    fn from(plan: &RatePlan) -> Self {
        Self {
            id: plan.id.clone(),
            unit_id: plan.unit_id().map(String::from),
            category: plan.category().map(|c| c.as_str().to_string()),
            nightly: plan.nightly,
            weekly: plan.weekly,
            monthly: plan.monthly,
            four_month: plan.four_month,
            currency: plan.currency.clone(),
        }
    }
}

/// Full unit record
#[derive(Debug, Serialize, ToSchema)]
pub struct UnitDto {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// TRAILER | COTTAGE_1BR | COTTAGE_2BR | RV_SITE
    pub unit_type: String,
    pub capacity: i32,
    pub beds: Option<i32>,
    pub baths: Option<f64>,
    pub amenities: Vec<String>,
    pub features: Vec<String>,
    pub photos: Vec<String>,
    pub active: bool,
    pub rate_plan: Option<RatePlanDto>,
    pub confirmed_bookings: u64,
}

impl From<UnitListing> for UnitDto {
    fn from(listing: UnitListing) -> Self {
        let UnitListing {
            unit,
            rate_plan,
            confirmed_bookings,
        } = listing;
        Self {
            id: unit.id,
            slug: unit.slug,
            name: unit.name,
            unit_type: unit.unit_type.as_str().to_string(),
            capacity: unit.capacity,
            beds: unit.beds,
            baths: unit.baths,
            amenities: unit.amenities,
            features: unit.features,
            photos: unit.photos,
            active: unit.active,
            rate_plan: rate_plan.as_ref().map(RatePlanDto::from),
            confirmed_bookings,
        }
    }
}

/// Short unit reference embedded in quotes and bookings
#[derive(Debug, Serialize, ToSchema)]
pub struct UnitSummaryDto {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub unit_type: String,
}

impl From<&Unit> for UnitSummaryDto {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id.clone(),
            slug: unit.slug.clone(),
            name: unit.name.clone(),
            unit_type: unit.unit_type.as_str().to_string(),
        }
    }
}

/// Calendar window; defaults to today plus the configured number of days
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    /// YYYY-MM-DD or RFC 3339
    pub start_date: Option<String>,
    /// YYYY-MM-DD or RFC 3339, exclusive
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FreeRangeDto {
    pub start: String,
    /// First night that is not free
    pub end: String,
    pub nights: i64,
}

impl From<FreeRange> for FreeRangeDto {
    fn from(r: FreeRange) -> Self {
        Self {
            start: r.start.to_string(),
            end: r.end.to_string(),
            nights: (r.end - r.start).num_days(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityCalendarDto {
    pub unit_id: String,
    pub start_date: String,
    pub end_date: String,
    pub free_ranges: Vec<FreeRangeDto>,
}

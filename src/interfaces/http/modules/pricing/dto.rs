//! Pricing DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::services::Quote;
use crate::domain::PriceBreakdown;

use super::super::units::UnitSummaryDto;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PricingQuery {
    pub unit_id: String,
    /// YYYY-MM-DD or RFC 3339
    pub check_in: String,
    pub check_out: String,
    /// Defaults to 1
    pub guests: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TypePricingQuery {
    /// TRAILER | COTTAGE_1BR | COTTAGE_2BR | RV_SITE
    pub unit_type: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeeLineDto {
    pub name: String,
    pub amount: i64,
}

/// Price of a stay, all amounts in cents
#[derive(Debug, Serialize, ToSchema)]
pub struct PriceBreakdownDto {
    pub nights: i64,
    /// nightly | weekly | monthly | four_month
    pub tier: String,
    pub subtotal: i64,
    pub price_per_night: i64,
    pub discount_percentage: i32,
    pub seasonal_discount: i64,
    pub season_name: Option<String>,
    pub fees: Vec<FeeLineDto>,
    pub fees_total: i64,
    pub total: i64,
    pub currency: String,
}

impl From<PriceBreakdown> for PriceBreakdownDto {
    fn from(b: PriceBreakdown) -> Self {
        Self {
            nights: b.nights,
            tier: b.tier.as_str().to_string(),
            subtotal: b.subtotal,
            price_per_night: b.price_per_night,
            discount_percentage: b.discount_percentage,
            seasonal_discount: b.seasonal_discount,
            season_name: b.season_name,
            fees: b
                .fees
                .into_iter()
                .map(|f| FeeLineDto {
                    name: f.name,
                    amount: f.amount,
                })
                .collect(),
            fees_total: b.fees_total,
            total: b.total,
            currency: b.currency,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteDto {
    pub unit: UnitSummaryDto,
    pub check_in: String,
    pub check_out: String,
    pub guests: i32,
    pub pricing: PriceBreakdownDto,
}

impl From<Quote> for QuoteDto {
    fn from(q: Quote) -> Self {
        Self {
            unit: UnitSummaryDto::from(&q.unit),
            check_in: q.stay.check_in.to_string(),
            check_out: q.stay.check_out.to_string(),
            guests: q.guests,
            pricing: q.breakdown.into(),
        }
    }
}

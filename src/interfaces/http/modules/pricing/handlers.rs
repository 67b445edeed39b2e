//! Pricing HTTP handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use crate::application::services::PricingService;
use crate::domain::{DomainResult, StayRange, UnitType};
use crate::interfaces::http::common::{domain_error, ApiResponse, ApiResult};
use crate::shared::dates::parse_date;

use super::dto::*;

#[derive(Clone)]
pub struct PricingState {
    pub pricing: Arc<PricingService>,
}

/// Parse a check-in/check-out pair from query or body fields.
pub(crate) fn parse_stay(check_in: &str, check_out: &str) -> DomainResult<StayRange> {
    let check_in = parse_date("check_in", check_in)?;
    let check_out = parse_date("check_out", check_out)?;
    StayRange::new(check_in, check_out)
}

#[utoipa::path(
    get,
    path = "/api/v1/pricing",
    tag = "Pricing",
    params(PricingQuery),
    responses(
        (status = 200, description = "Price breakdown", body = ApiResponse<QuoteDto>),
        (status = 400, description = "Invalid dates, guest count or missing rate plan"),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn get_pricing(
    State(state): State<PricingState>,
    Query(query): Query<PricingQuery>,
) -> ApiResult<QuoteDto> {
    let stay = parse_stay(&query.check_in, &query.check_out).map_err(domain_error)?;
    let quote = state
        .pricing
        .quote(&query.unit_id, stay, query.guests.unwrap_or(1))
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(quote.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/pricing/type",
    tag = "Pricing",
    params(TypePricingQuery),
    responses(
        (status = 200, description = "Price for the first available unit of the type", body = ApiResponse<QuoteDto>),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "No active units of this type"),
        (status = 409, description = "Every unit of this type is taken")
    )
)]
pub async fn get_pricing_by_type(
    State(state): State<PricingState>,
    Query(query): Query<TypePricingQuery>,
) -> ApiResult<QuoteDto> {
    let unit_type: UnitType = query.unit_type.parse().map_err(domain_error)?;
    let stay = parse_stay(&query.check_in, &query.check_out).map_err(domain_error)?;
    let quote = state
        .pricing
        .quote_for_type(unit_type, stay, query.guests.unwrap_or(1))
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(quote.into())))
}

//! Availability HTTP handler

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use crate::application::services::AvailabilityService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ApiResult};
use crate::interfaces::http::modules::pricing::parse_stay;

use super::dto::*;

#[derive(Clone)]
pub struct AvailabilityState {
    pub availability: Arc<AvailabilityService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/availability",
    tag = "Availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Availability result with conflicts", body = ApiResponse<AvailabilityDto>),
        (status = 400, description = "Invalid dates"),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn check_availability(
    State(state): State<AvailabilityState>,
    Query(query): Query<AvailabilityQuery>,
) -> ApiResult<AvailabilityDto> {
    let stay = parse_stay(&query.check_in, &query.check_out).map_err(domain_error)?;
    let report = state
        .availability
        .check(&query.unit_id, stay)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(report.into())))
}

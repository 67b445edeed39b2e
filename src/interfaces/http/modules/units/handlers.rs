//! Unit catalog HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Duration, Utc};

use crate::application::services::{AvailabilityService, CatalogService};
use crate::interfaces::http::common::{domain_error, ApiResponse, ApiResult};
use crate::shared::dates::parse_date;

use super::dto::*;

/// Application state for unit handlers.
#[derive(Clone)]
pub struct UnitsState {
    pub catalog: Arc<CatalogService>,
    pub availability: Arc<AvailabilityService>,
    /// Calendar length when no end date is given
    pub calendar_days: i64,
}

#[utoipa::path(
    get,
    path = "/api/v1/units",
    tag = "Units",
    responses(
        (status = 200, description = "All units with their applicable rate plan", body = ApiResponse<Vec<UnitDto>>)
    )
)]
pub async fn list_units(State(state): State<UnitsState>) -> ApiResult<Vec<UnitDto>> {
    let units = state.catalog.list_units().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        units.into_iter().map(UnitDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/units/{unit}",
    tag = "Units",
    params(("unit" = String, Path, description = "Unit slug (or id)")),
    responses(
        (status = 200, description = "Unit details", body = ApiResponse<UnitDto>),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn get_unit(
    State(state): State<UnitsState>,
    Path(unit): Path<String>,
) -> ApiResult<UnitDto> {
    let listing = state.catalog.unit_listing(&unit).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(listing.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/units/{unit}/availability-calendar",
    tag = "Units",
    params(
        ("unit" = String, Path, description = "Unit id (or slug)"),
        CalendarQuery
    ),
    responses(
        (status = 200, description = "Free date ranges", body = ApiResponse<AvailabilityCalendarDto>),
        (status = 400, description = "Invalid date window"),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn availability_calendar(
    State(state): State<UnitsState>,
    Path(unit): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> ApiResult<AvailabilityCalendarDto> {
    let start = match query.start_date.as_deref() {
        Some(raw) => parse_date("start_date", raw).map_err(domain_error)?,
        None => Utc::now().date_naive(),
    };
    let end = match query.end_date.as_deref() {
        Some(raw) => parse_date("end_date", raw).map_err(domain_error)?,
        None => start + Duration::days(state.calendar_days),
    };

    let unit = state.catalog.unit(&unit).await.map_err(domain_error)?;
    let free = state
        .availability
        .calendar(&unit.id, start, end)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(AvailabilityCalendarDto {
        unit_id: unit.id,
        start_date: start.to_string(),
        end_date: end.to_string(),
        free_ranges: free.into_iter().map(FreeRangeDto::from).collect(),
    })))
}

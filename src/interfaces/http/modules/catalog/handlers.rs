//! Season and fee HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::application::services::CatalogService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, ValidatedJson,
};
use crate::shared::dates::parse_date;

use super::dto::*;

#[derive(Clone)]
pub struct CatalogState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/seasons",
    tag = "Seasons & Fees",
    responses(
        (status = 200, description = "Seasons ordered by start date", body = ApiResponse<Vec<SeasonDto>>)
    )
)]
pub async fn list_seasons(State(state): State<CatalogState>) -> ApiResult<Vec<SeasonDto>> {
    let seasons = state.catalog.list_seasons().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        seasons.into_iter().map(SeasonDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/seasons",
    tag = "Seasons & Fees",
    request_body = CreateSeasonRequest,
    responses(
        (status = 201, description = "Season created", body = ApiResponse<SeasonDto>),
        (status = 400, description = "Invalid dates"),
        (status = 422, description = "Request failed validation")
    )
)]
pub async fn create_season(
    State(state): State<CatalogState>,
    ValidatedJson(request): ValidatedJson<CreateSeasonRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SeasonDto>>), ApiError> {
    let start = parse_date("start_date", &request.start_date).map_err(domain_error)?;
    let end = parse_date("end_date", &request.end_date).map_err(domain_error)?;
    let season = state
        .catalog
        .create_season(request.name.trim(), start, end, request.discount_pct)
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(season.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/fees",
    tag = "Seasons & Fees",
    responses(
        (status = 200, description = "Fees ordered by name", body = ApiResponse<Vec<FeeDto>>)
    )
)]
pub async fn list_fees(State(state): State<CatalogState>) -> ApiResult<Vec<FeeDto>> {
    let fees = state.catalog.list_fees().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        fees.into_iter().map(FeeDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/fees",
    tag = "Seasons & Fees",
    request_body = CreateFeeRequest,
    responses(
        (status = 201, description = "Fee created", body = ApiResponse<FeeDto>),
        (status = 422, description = "Request failed validation")
    )
)]
pub async fn create_fee(
    State(state): State<CatalogState>,
    ValidatedJson(request): ValidatedJson<CreateFeeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FeeDto>>), ApiError> {
    let fee = state
        .catalog
        .create_fee(request.name.trim(), request.amount, request.per_stay)
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(fee.into()))))
}

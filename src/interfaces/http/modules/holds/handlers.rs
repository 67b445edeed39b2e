//! Hold HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use crate::application::services::HoldService;
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, ValidatedJson,
};
use crate::interfaces::http::modules::pricing::parse_stay;

use super::dto::*;

#[derive(Clone)]
pub struct HoldsState {
    pub holds: Arc<HoldService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/holds",
    tag = "Holds",
    request_body = CreateHoldRequest,
    responses(
        (status = 201, description = "Hold placed", body = ApiResponse<HoldDto>),
        (status = 400, description = "Invalid dates or expiration"),
        (status = 404, description = "Unit not found"),
        (status = 409, description = "Dates are taken"),
        (status = 422, description = "Request failed validation")
    )
)]
pub async fn create_hold(
    State(state): State<HoldsState>,
    ValidatedJson(request): ValidatedJson<CreateHoldRequest>,
) -> Result<(StatusCode, Json<ApiResponse<HoldDto>>), ApiError> {
    let stay = parse_stay(&request.check_in, &request.check_out).map_err(domain_error)?;
    let hold = state
        .holds
        .create(&request.unit_id, stay, request.expiration_minutes)
        .await
        .map_err(domain_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(HoldDto::at(&hold, Utc::now()))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/holds/{id}",
    tag = "Holds",
    params(("id" = String, Path, description = "Hold ID")),
    responses(
        (status = 200, description = "Hold with its current status", body = ApiResponse<HoldDto>),
        (status = 404, description = "Hold not found")
    )
)]
pub async fn get_hold(
    State(state): State<HoldsState>,
    Path(id): Path<String>,
) -> ApiResult<HoldDto> {
    let hold = state.holds.get(&id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(HoldDto::at(&hold, Utc::now()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/holds/{id}",
    tag = "Holds",
    params(("id" = String, Path, description = "Hold ID")),
    responses(
        (status = 200, description = "Hold released (or already inactive)", body = ApiResponse<HoldDto>),
        (status = 404, description = "Hold not found"),
        (status = 409, description = "Hold already became a booking")
    )
)]
pub async fn release_hold(
    State(state): State<HoldsState>,
    Path(id): Path<String>,
) -> ApiResult<HoldDto> {
    let hold = state.holds.release(&id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(HoldDto::at(&hold, Utc::now()))))
}

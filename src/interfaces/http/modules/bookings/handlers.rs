//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::services::BookingService;
use crate::domain::{BookingStatus, DomainError};
use crate::interfaces::http::common::{
    domain_error, ApiError, ApiResponse, ApiResult, ValidatedJson,
};
use crate::shared::dates::parse_date;

use super::dto::*;

#[derive(Clone)]
pub struct BookingsState {
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking confirmed", body = ApiResponse<BookingCreatedDto>),
        (status = 400, description = "Invalid input or hold"),
        (status = 404, description = "Unit or unit type not found"),
        (status = 409, description = "Dates are no longer available"),
        (status = 422, description = "Request failed validation")
    )
)]
pub async fn create_booking(
    State(state): State<BookingsState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingCreatedDto>>), ApiError> {
    let new_booking = request.into_new_booking().map_err(domain_error)?;
    let receipt = state
        .bookings
        .create(new_booking)
        .await
        .map_err(domain_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(receipt.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Bookings ordered by check-in", body = ApiResponse<Vec<BookingDetailsDto>>),
        (status = 400, description = "Invalid window")
    )
)]
pub async fn list_bookings(
    State(state): State<BookingsState>,
    Query(query): Query<BookingListQuery>,
) -> ApiResult<Vec<BookingDetailsDto>> {
    let window = match (query.start_date.as_deref(), query.end_date.as_deref()) {
        (None, None) => None,
        (Some(start), Some(end)) => Some((
            parse_date("start_date", start).map_err(domain_error)?,
            parse_date("end_date", end).map_err(domain_error)?,
        )),
        _ => {
            return Err(domain_error(DomainError::Validation(
                "start_date and end_date must be given together".to_string(),
            )))
        }
    };
    let bookings = state.bookings.list(window).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        bookings.into_iter().map(BookingDetailsDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDetailsDto>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingsState>,
    Path(id): Path<String>,
) -> ApiResult<BookingDetailsDto> {
    let details = state.bookings.get(&id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(details.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/bookings/{id}/status",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<BookingDto>),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_booking_status(
    State(state): State<BookingsState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateBookingStatusRequest>,
) -> ApiResult<BookingDto> {
    let status: BookingStatus = request.status.trim().parse().map_err(domain_error)?;
    let booking = state
        .bookings
        .update_status(&id, status)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(BookingDto::from(&booking))))
}

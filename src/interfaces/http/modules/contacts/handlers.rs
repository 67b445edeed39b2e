//! Contact form HTTP handler

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::application::services::ContactService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ApiResult, ValidatedJson};

use super::dto::*;

#[derive(Clone)]
pub struct ContactsState {
    pub contacts: Arc<ContactService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    tag = "Contacts",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission forwarded", body = ApiResponse<ContactReceiptDto>),
        (status = 400, description = "Invalid dates"),
        (status = 422, description = "Request failed validation"),
        (status = 502, description = "CRM rejected the submission")
    )
)]
pub async fn submit_contact(
    State(state): State<ContactsState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> ApiResult<ContactReceiptDto> {
    let submission = request.into_submission().map_err(domain_error)?;
    state
        .contacts
        .submit(submission)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(ContactReceiptDto {
        submitted: true,
        message: "Thanks, we will get back to you shortly".to_string(),
    })))
}

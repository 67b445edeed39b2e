//! JSON body extractor that also runs `validator` rules.
//!
//! A body that does not parse is a 400. A body that parses but breaks a
//! field rule is a 422 whose `error` reads like
//! `guest_email must be a valid email address; guests must be at least 1`,
//! with fields in alphabetical order.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use super::ApiResponse;

/// `axum::Json<T>` plus `T::validate()`.
///
/// ```ignore
/// async fn create(ValidatedJson(body): ValidatedJson<CreateHoldRequest>) { .. }
/// ```
pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    Malformed(JsonRejection),
    Invalid(ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Malformed(rejection) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON: {}", rejection.body_text()),
            ),
            Self::Invalid(errors) => (StatusCode::UNPROCESSABLE_ENTITY, describe(&errors)),
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

/// One sentence per broken rule, fields sorted so the text is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    let sentences: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| errs.iter().map(move |e| sentence(&field, e)))
        .collect();
    if sentences.is_empty() {
        "Validation failed".to_string()
    } else {
        sentences.join("; ")
    }
}

fn sentence(field: &str, err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return format!("{} {}", field, message);
    }
    let min = err.params.get("min");
    let max = err.params.get("max");
    let unit = if err.code == "length" { " characters" } else { "" };
    match (&*err.code, min, max) {
        ("email", _, _) => format!("{} must be a valid email address", field),
        ("length" | "range", Some(min), Some(max)) => {
            format!("{} must be between {} and {}{}", field, min, max, unit)
        }
        ("length" | "range", Some(min), None) => {
            format!("{} must be at least {}{}", field, min, unit)
        }
        ("length" | "range", None, Some(max)) => {
            format!("{} must be at most {}{}", field, max, unit)
        }
        (code, _, _) => format!("{} is invalid ({})", field, code),
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Malformed)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::Invalid)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

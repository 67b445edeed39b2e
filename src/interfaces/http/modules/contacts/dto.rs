//! Contact form DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::ports::ContactSubmission;
use crate::domain::DomainResult;
use crate::shared::dates::parse_date;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 10))]
    pub phone: String,
    #[validate(length(min = 10))]
    pub message: String,
    /// Free-form, e.g. "mid March, flexible"
    pub preferred_dates: Option<String>,
    pub unit_id: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    #[validate(range(min = 1))]
    pub guests: Option<i32>,
}

impl ContactRequest {
    pub fn into_submission(self) -> DomainResult<ContactSubmission> {
        let check_in = self
            .check_in
            .as_deref()
            .map(|raw| parse_date("check_in", raw))
            .transpose()?;
        let check_out = self
            .check_out
            .as_deref()
            .map(|raw| parse_date("check_out", raw))
            .transpose()?;
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone,
            message: self.message,
            preferred_dates: self.preferred_dates,
            unit_id: self.unit_id,
            check_in,
            check_out,
            guests: self.guests,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactReceiptDto {
    pub submitted: bool,
    pub message: String,
}

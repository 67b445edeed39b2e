//! Hold DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Hold;

/// Request to hold a unit while the guest checks out
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHoldRequest {
    #[validate(length(min = 1))]
    pub unit_id: String,
    /// YYYY-MM-DD or RFC 3339
    pub check_in: String,
    pub check_out: String,
    /// Minutes until the hold lapses (5-60 by default, 15 when omitted)
    pub expiration_minutes: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HoldDto {
    pub id: String,
    pub unit_id: String,
    pub check_in: String,
    pub check_out: String,
    /// ACTIVE | EXPIRED | CONVERTED | CANCELLED, evaluated at response time
    pub status: String,
    pub expires_at: String,
    pub seconds_remaining: i64,
    pub created_at: String,
}

impl HoldDto {
    pub fn at(hold: &Hold, now: DateTime<Utc>) -> Self {
        Self {
            id: hold.id.clone(),
            unit_id: hold.unit_id.clone(),
            check_in: hold.check_in.to_string(),
            check_out: hold.check_out.to_string(),
            status: hold.effective_status(now).as_str().to_string(),
            expires_at: hold.expires_at.to_rfc3339(),
            seconds_remaining: if hold.is_live(now) {
                hold.seconds_remaining(now)
            } else {
                0
            },
            created_at: hold.created_at.to_rfc3339(),
        }
    }
}

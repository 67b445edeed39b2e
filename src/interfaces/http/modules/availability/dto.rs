//! Availability DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::services::AvailabilityReport;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    pub unit_id: String,
    /// YYYY-MM-DD or RFC 3339
    pub check_in: String,
    pub check_out: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityDto {
    pub unit_id: String,
    pub check_in: String,
    pub check_out: String,
    pub available: bool,
    /// Conflicting stays, e.g. `"Jan 5 - Jan 9"`
    pub conflicts: Vec<String>,
    pub conflicting_bookings: Vec<String>,
    pub conflicting_holds: Vec<String>,
}

impl From<AvailabilityReport> for AvailabilityDto {
    fn from(r: AvailabilityReport) -> Self {
        Self {
            unit_id: r.unit_id,
            check_in: r.stay.check_in.to_string(),
            check_out: r.stay.check_out.to_string(),
            available: r.available,
            conflicts: r.conflicts,
            conflicting_bookings: r.conflicting_bookings,
            conflicting_holds: r.conflicting_holds,
        }
    }
}

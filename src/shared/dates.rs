//! Calendar date helpers for query/body parameters.

use chrono::{DateTime, NaiveDate, Utc};

use super::errors::DomainError;

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date.
///
/// Timestamps are reduced to their UTC date.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, DomainError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| DomainError::Validation(format!("Invalid {}: '{}'", field, raw)))
}

/// Short label used in conflict listings, e.g. `Jan 5`.
pub fn short_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

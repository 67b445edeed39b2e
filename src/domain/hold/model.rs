//! Hold domain entity

use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::domain::stay::StayRange;
use crate::shared::errors::DomainError;

/// Hold status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldStatus {
    /// Blocking the dates until `expires_at`
    Active,
    /// Past `expires_at` without being converted
    Expired,
    /// Turned into a booking
    Converted,
    /// Released by the guest
    Cancelled,
}

impl HoldStatus {
    pub const ALL: [HoldStatus; 4] = [
        HoldStatus::Active,
        HoldStatus::Expired,
        HoldStatus::Converted,
        HoldStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Converted => "CONVERTED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for HoldStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Invalid hold status '{}'", s)))
    }
}

impl std::fmt::Display for HoldStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Short-lived soft lock on a unit's dates between quote and payment
#[derive(Debug, Clone)]
pub struct Hold {
    pub id: String,
    pub unit_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub expires_at: DateTime<Utc>,
    /// Stored status. Use [`Hold::effective_status`] for reads.
    pub status: HoldStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hold {
    pub fn new(unit_id: impl Into<String>, stay: StayRange, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            unit_id: unit_id.into(),
            check_in: stay.check_in,
            check_out: stay.check_out,
            expires_at: now + ttl,
            status: HoldStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Expiry is evaluated lazily: an ACTIVE row past its deadline reads as EXPIRED.
    pub fn effective_status(&self, now: DateTime<Utc>) -> HoldStatus {
        match self.status {
            HoldStatus::Active if self.expires_at <= now => HoldStatus::Expired,
            s => s,
        }
    }

    /// Whether this hold still blocks its dates
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.effective_status(now) == HoldStatus::Active
    }

    pub fn seconds_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }

    pub fn matches(&self, unit_id: &str, stay: &StayRange) -> bool {
        self.unit_id == unit_id && self.check_in == stay.check_in && self.check_out == stay.check_out
    }

    /// Release the dates. Releasing an already released or expired hold is a no-op.
    pub fn cancel(&mut self, now: DateTime<Utc>) -> Result<bool, DomainError> {
        match self.effective_status(now) {
            HoldStatus::Active => {
                self.status = HoldStatus::Cancelled;
                self.updated_at = now;
                Ok(true)
            }
            HoldStatus::Cancelled | HoldStatus::Expired => Ok(false),
            HoldStatus::Converted => Err(DomainError::Conflict(format!(
                "Hold {} was already converted into a booking",
                self.id
            ))),
        }
    }

    pub fn convert(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        match self.effective_status(now) {
            HoldStatus::Active => {
                self.status = HoldStatus::Converted;
                self.updated_at = now;
                Ok(())
            }
            HoldStatus::Expired => Err(DomainError::Validation("Hold has expired".to_string())),
            other => Err(DomainError::Validation(format!(
                "Hold is {} and cannot be used",
                other
            ))),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

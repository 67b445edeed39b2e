//! Payment record

use chrono::{DateTime, Utc};

/// External payment tied 1:1 to a booking. The provider owns the money flow;
/// we only keep its intent id and last known status.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub provider: String,
    pub provider_intent_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub const PROVIDER_STRIPE: &'static str = "stripe";

    pub fn pending(
        booking_id: impl Into<String>,
        provider_intent_id: impl Into<String>,
        amount_cents: i64,
        currency: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            booking_id: booking_id.into(),
            provider: Self::PROVIDER_STRIPE.to_string(),
            provider_intent_id: provider_intent_id.into(),
            amount_cents,
            currency: currency.into(),
            status: "pending".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

//! Booking DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::services::{BookingDetails, BookingReceipt, NewBooking, UnitSelector};
use crate::domain::{Booking, Customer, DomainError, DomainResult, Payment, UnitType};
use crate::interfaces::http::modules::pricing::{parse_stay, PriceBreakdownDto};
use crate::interfaces::http::modules::units::UnitSummaryDto;

/// Booking request from the checkout page
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    /// Book this exact unit...
    pub unit_id: Option<String>,
    /// ...or the first available unit of this type
    pub unit_type: Option<String>,
    /// YYYY-MM-DD or RFC 3339
    pub check_in: String,
    pub check_out: String,
    #[validate(range(min = 1))]
    pub guests: i32,
    #[validate(length(min = 1))]
    pub guest_name: String,
    #[validate(email)]
    pub guest_email: String,
    #[validate(length(min = 10))]
    pub guest_phone: String,
    pub special_requests: Option<String>,
    /// Hold placed earlier for the same unit and dates
    pub hold_id: Option<String>,
    /// Payment provider intent to record against the booking
    pub payment_intent_id: Option<String>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl CreateBookingRequest {
    pub fn into_new_booking(self) -> DomainResult<NewBooking> {
        let unit = match (non_empty(self.unit_id), non_empty(self.unit_type)) {
            (Some(id), _) => UnitSelector::Id(id),
            (None, Some(t)) => UnitSelector::Type(t.parse::<UnitType>()?),
            (None, None) => {
                return Err(DomainError::Validation(
                    "Either unit_id or unit_type is required".to_string(),
                ))
            }
        };
        Ok(NewBooking {
            unit,
            stay: parse_stay(&self.check_in, &self.check_out)?,
            guests: self.guests,
            guest_name: self.guest_name.trim().to_string(),
            guest_email: self.guest_email.trim().to_lowercase(),
            guest_phone: Some(self.guest_phone),
            special_requests: non_empty(self.special_requests),
            hold_id: non_empty(self.hold_id),
            payment_intent_id: non_empty(self.payment_intent_id),
        })
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookingStatusRequest {
    /// PENDING | CONFIRMED | CHECKED_IN | CHECKED_OUT | CANCELLED
    #[validate(length(min = 1))]
    pub status: String,
}

/// Optional window; when given both dates are required
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingListQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: String,
    pub unit_id: String,
    pub customer_id: String,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub status: String,
    pub total_cents: i64,
    pub currency: String,
    pub guests: i32,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Booking> for BookingDto {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id.clone(),
            unit_id: b.unit_id.clone(),
            customer_id: b.customer_id.clone(),
            check_in: b.check_in.to_string(),
            check_out: b.check_out.to_string(),
            nights: b.nights(),
            status: b.status.as_str().to_string(),
            total_cents: b.total_cents,
            currency: b.currency.clone(),
            guests: b.guests,
            notes: b.notes.clone(),
            created_at: b.created_at.to_rfc3339(),
            updated_at: b.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.clone(),
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentDto {
    pub id: String,
    pub provider: String,
    pub provider_intent_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
}

impl From<&Payment> for PaymentDto {
    fn from(p: &Payment) -> Self {
        Self {
            id: p.id.clone(),
            provider: p.provider.clone(),
            provider_intent_id: p.provider_intent_id.clone(),
            amount_cents: p.amount_cents,
            currency: p.currency.clone(),
            status: p.status.clone(),
        }
    }
}

/// Response to a successful booking
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingCreatedDto {
    pub booking: BookingDto,
    pub unit: UnitSummaryDto,
    pub customer: CustomerDto,
    pub payment: Option<PaymentDto>,
    pub pricing: PriceBreakdownDto,
    /// Present when the booking is stored but the CRM did not accept it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crm_sync_error: Option<String>,
}

impl From<BookingReceipt> for BookingCreatedDto {
    fn from(r: BookingReceipt) -> Self {
        Self {
            booking: BookingDto::from(&r.booking),
            unit: UnitSummaryDto::from(&r.unit),
            customer: CustomerDto::from(&r.customer),
            payment: r.payment.as_ref().map(PaymentDto::from),
            pricing: r.pricing.into(),
            crm_sync_error: r.crm_sync_error,
        }
    }
}

/// A booking with its unit, guest and payment
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDetailsDto {
    pub booking: BookingDto,
    pub unit: Option<UnitSummaryDto>,
    pub customer: Option<CustomerDto>,
    pub payment: Option<PaymentDto>,
}

impl From<BookingDetails> for BookingDetailsDto {
    fn from(d: BookingDetails) -> Self {
        Self {
            booking: BookingDto::from(&d.booking),
            unit: d.unit.as_ref().map(UnitSummaryDto::from),
            customer: d.customer.as_ref().map(CustomerDto::from),
            payment: d.payment.as_ref().map(PaymentDto::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateBookingRequest {
        CreateBookingRequest {
            unit_id: None,
            unit_type: Some("TRAILER".to_string()),
            check_in: "2030-01-05".to_string(),
            check_out: "2030-01-09T12:00:00Z".to_string(),
            guests: 2,
            guest_name: "  Jane Doe ".to_string(),
            guest_email: "Jane@Example.com".to_string(),
            guest_phone: "5551234567".to_string(),
            special_requests: Some("   ".to_string()),
            hold_id: None,
            payment_intent_id: None,
        }
    }

    #[test]
    fn unit_type_selector_and_normalized_guest() {
        let booking = request().into_new_booking().unwrap();
        assert!(matches!(booking.unit, UnitSelector::Type(UnitType::Trailer)));
        assert_eq!(booking.stay.nights(), 4);
        assert_eq!(booking.guest_name, "Jane Doe");
        assert_eq!(booking.guest_email, "jane@example.com");
        assert!(booking.special_requests.is_none());
    }

    #[test]
    fn unit_id_takes_precedence() {
        let mut req = request();
        req.unit_id = Some("unit-1".to_string());
        let booking = req.into_new_booking().unwrap();
        assert!(matches!(booking.unit, UnitSelector::Id(ref id) if id == "unit-1"));
    }

    #[test]
    fn missing_unit_is_rejected() {
        let mut req = request();
        req.unit_type = None;
        assert!(matches!(
            req.into_new_booking().unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}

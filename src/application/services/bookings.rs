//! Booking creation, lookup and status changes

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};

use super::availability::AvailabilityService;
use super::locks::UnitLocks;
use super::pricing::{ensure_bookable, PricingService};
use crate::application::ports::{BookingCrmPayload, SharedCrmSync};
use crate::domain::{
    Booking, BookingStatus, Customer, DomainError, DomainResult, HoldStatus, Payment,
    PriceBreakdown, RepositoryProvider, StayRange, Unit, UnitType,
};

/// How the guest picked the unit
#[derive(Debug, Clone)]
pub enum UnitSelector {
    Id(String),
    /// First available active unit of the type
    Type(UnitType),
}

/// Validated booking request
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub unit: UnitSelector,
    pub stay: StayRange,
    pub guests: i32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub special_requests: Option<String>,
    pub hold_id: Option<String>,
    pub payment_intent_id: Option<String>,
}

/// Everything produced by a successful booking
#[derive(Debug, Clone)]
pub struct BookingReceipt {
    pub booking: Booking,
    pub unit: Unit,
    pub customer: Customer,
    pub payment: Option<Payment>,
    pub pricing: PriceBreakdown,
    /// Set when the booking was stored but the CRM did not take it
    pub crm_sync_error: Option<String>,
}

/// A booking with its related records
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub booking: Booking,
    pub unit: Option<Unit>,
    pub customer: Option<Customer>,
    pub payment: Option<Payment>,
}

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    availability: Arc<AvailabilityService>,
    pricing: Arc<PricingService>,
    locks: UnitLocks,
    crm: SharedCrmSync,
}

impl BookingService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        availability: Arc<AvailabilityService>,
        pricing: Arc<PricingService>,
        locks: UnitLocks,
        crm: SharedCrmSync,
    ) -> Self {
        Self {
            repos,
            availability,
            pricing,
            locks,
            crm,
        }
    }

    pub async fn create(&self, request: NewBooking) -> DomainResult<BookingReceipt> {
        let candidates = self.candidates(&request).await?;
        let receipt = self.book_first_free(candidates, &request).await?;

        metrics::counter!("bookings_created_total").increment(1);
        info!(
            "Booking {} confirmed: {} {} - {} for {} ({} {})",
            receipt.booking.id,
            receipt.unit.slug,
            receipt.booking.check_in,
            receipt.booking.check_out,
            receipt.customer.email,
            receipt.booking.total_cents,
            receipt.booking.currency
        );

        let payload = BookingCrmPayload {
            booking_id: receipt.booking.id.clone(),
            unit_name: receipt.unit.name.clone(),
            unit_type: receipt.unit.unit_type.to_string(),
            guest_name: request.guest_name.clone(),
            guest_email: receipt.customer.email.clone(),
            guest_phone: request.guest_phone.clone(),
            check_in: receipt.booking.check_in,
            check_out: receipt.booking.check_out,
            guests: receipt.booking.guests,
            total_cents: receipt.booking.total_cents,
            currency: receipt.booking.currency.clone(),
            special_requests: request.special_requests.clone(),
        };
        let crm_sync_error = match self.crm.sync_booking(&payload).await {
            Ok(()) => None,
            Err(e) => {
                metrics::counter!("crm_sync_failures_total", "kind" => "booking").increment(1);
                warn!("CRM sync failed for booking {}: {}", receipt.booking.id, e);
                Some(e.to_string())
            }
        };

        Ok(BookingReceipt {
            crm_sync_error,
            ..receipt
        })
    }

    /// Units the request may land on, in the order they are tried.
    ///
    /// A typed request that carries a hold is pinned to the held unit.
    async fn candidates(&self, request: &NewBooking) -> DomainResult<Vec<Unit>> {
        let unit_type = match &request.unit {
            UnitSelector::Id(id) => return Ok(vec![self.availability.unit(id).await?]),
            UnitSelector::Type(unit_type) => *unit_type,
        };
        let units = self.repos.units().find_active_by_type(unit_type).await?;
        if units.is_empty() {
            return Err(DomainError::not_found("Unit", "type", unit_type.as_str()));
        }
        if let Some(hold_id) = &request.hold_id {
            if let Some(hold) = self.repos.holds().find_by_id(hold_id).await? {
                if let Some(unit) = units.iter().find(|u| u.id == hold.unit_id) {
                    return Ok(vec![unit.clone()]);
                }
            }
        }
        Ok(units)
    }

    /// Try each candidate under its lock. A unit taken since it was listed
    /// only moves a typed request on to the next one.
    async fn book_first_free(
        &self,
        candidates: Vec<Unit>,
        request: &NewBooking,
    ) -> DomainResult<BookingReceipt> {
        let typed = matches!(request.unit, UnitSelector::Type(_));
        let mut unit_type = None;
        for unit in candidates {
            ensure_bookable(&unit, request.guests)?;
            unit_type = Some(unit.unit_type);
            let slug = unit.slug.clone();
            let attempt = {
                let _guard = self.locks.lock(&unit.id).await;
                self.create_locked(unit, request).await
            };
            match attempt {
                Err(DomainError::Conflict(_)) if typed => {
                    debug!(
                        "{} taken for {} - {}",
                        slug, request.stay.check_in, request.stay.check_out
                    );
                }
                result => return result,
            }
        }
        Err(DomainError::Unavailable(format!(
            "No {} units are available for the selected dates",
            unit_type.map(|t| t.as_str()).unwrap_or("matching")
        )))
    }

    /// Steps that must not interleave with another write on the same unit.
    async fn create_locked(&self, unit: Unit, request: &NewBooking) -> DomainResult<BookingReceipt> {
        let now = Utc::now();
        let stay = request.stay;

        let mut hold = match &request.hold_id {
            Some(hold_id) => {
                let hold = self
                    .repos
                    .holds()
                    .find_by_id(hold_id)
                    .await?
                    .ok_or_else(|| DomainError::Validation("Invalid hold ID".to_string()))?;
                match hold.effective_status(now) {
                    HoldStatus::Active => {}
                    HoldStatus::Expired => {
                        return Err(DomainError::Validation("Hold has expired".to_string()))
                    }
                    other => {
                        return Err(DomainError::Validation(format!(
                            "Hold is {} and cannot be used",
                            other
                        )))
                    }
                }
                if !hold.matches(&unit.id, &stay) {
                    return Err(DomainError::Validation(
                        "Hold does not match booking data".to_string(),
                    ));
                }
                Some(hold)
            }
            None => None,
        };

        let report = self
            .availability
            .check_excluding(&unit.id, stay, request.hold_id.as_deref())
            .await?;
        if !report.available {
            return Err(DomainError::Conflict(
                "Dates are no longer available".to_string(),
            ));
        }

        let pricing = self.pricing.price_unit(&unit, &stay).await?;
        let customer = self.upsert_customer(request).await?;

        let mut booking = Booking::confirmed(
            &unit.id,
            &customer.id,
            stay,
            request.guests,
            pricing.total,
            &pricing.currency,
        );
        booking.notes = request.special_requests.clone();
        self.repos.bookings().save(booking.clone()).await?;

        if let Some(hold) = hold.as_mut() {
            hold.convert(now)?;
            self.repos.holds().update(hold.clone()).await?;
        }

        let payment = match &request.payment_intent_id {
            Some(intent) => {
                let payment = Payment::pending(&booking.id, intent, booking.total_cents, &booking.currency);
                self.repos.payments().save(payment.clone()).await?;
                Some(payment)
            }
            None => None,
        };

        Ok(BookingReceipt {
            booking,
            unit,
            customer,
            payment,
            pricing,
            crm_sync_error: None,
        })
    }

    async fn upsert_customer(&self, request: &NewBooking) -> DomainResult<Customer> {
        if let Some(existing) = self.repos.customers().find_by_email(&request.guest_email).await? {
            return Ok(existing);
        }
        let customer = Customer::from_full_name(
            &request.guest_name,
            &request.guest_email,
            request.guest_phone.clone(),
        );
        self.repos.customers().save(customer.clone()).await?;
        Ok(customer)
    }

    pub async fn get(&self, id: &str) -> DomainResult<BookingDetails> {
        let booking = self
            .repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", "id", id))?;
        self.details(booking).await
    }

    async fn details(&self, booking: Booking) -> DomainResult<BookingDetails> {
        let unit = self.repos.units().find_by_id(&booking.unit_id).await?;
        let customer = self.repos.customers().find_by_id(&booking.customer_id).await?;
        let payment = self.repos.payments().find_by_booking(&booking.id).await?;
        Ok(BookingDetails {
            booking,
            unit,
            customer,
            payment,
        })
    }

    /// Move a booking to `status`.
    ///
    /// Confirming a booking that is not confirmed re-runs the availability
    /// check under the unit lock, since its dates may have been rebooked.
    pub async fn update_status(&self, id: &str, status: BookingStatus) -> DomainResult<Booking> {
        let current = self
            .repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", "id", id))?;

        let booking = if status == BookingStatus::Confirmed && current.status != status {
            let _guard = self.locks.lock(&current.unit_id).await;
            let stay = StayRange {
                check_in: current.check_in,
                check_out: current.check_out,
            };
            let report = self
                .availability
                .check_excluding(&current.unit_id, stay, None)
                .await?;
            if !report.available {
                return Err(DomainError::Conflict(format!(
                    "Booking {} cannot be confirmed: {} already taken",
                    id,
                    report.conflicts.join(", ")
                )));
            }
            self.repos.bookings().update_status(id, status).await?
        } else {
            self.repos.bookings().update_status(id, status).await?
        };
        info!("Booking {} is now {}", booking.id, booking.status);
        Ok(booking)
    }

    /// All bookings, or only those touching `[from, to)`
    pub async fn list(&self, window: Option<(NaiveDate, NaiveDate)>) -> DomainResult<Vec<BookingDetails>> {
        if let Some((from, to)) = window {
            if to <= from {
                return Err(DomainError::Validation(
                    "End date must be after start date".to_string(),
                ));
            }
        }
        let bookings = self.repos.bookings().find_all(window).await?;
        let mut out = Vec::with_capacity(bookings.len());
        for booking in bookings {
            out.push(self.details(booking).await?);
        }
        Ok(out)
    }
}

//! Payment repository interface

use async_trait::async_trait;

use super::model::Payment;
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn save(&self, payment: Payment) -> DomainResult<()>;

    async fn find_by_booking(&self, booking_id: &str) -> DomainResult<Option<Payment>>;
}

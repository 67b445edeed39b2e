//! SeaORM implementation of PaymentRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::payment::{Payment, PaymentRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::payment;

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: payment::Model) -> Payment {
    Payment {
        id: m.id,
        booking_id: m.booking_id,
        provider: m.provider,
        provider_intent_id: m.provider_intent_id,
        amount_cents: m.amount_cents,
        currency: m.currency,
        status: m.status,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn save(&self, p: Payment) -> DomainResult<()> {
        debug!("Recording {} payment {} for booking {}", p.provider, p.provider_intent_id, p.booking_id);

        let model = payment::ActiveModel {
            id: Set(p.id),
            booking_id: Set(p.booking_id),
            provider: Set(p.provider),
            provider_intent_id: Set(p.provider_intent_id),
            amount_cents: Set(p.amount_cents),
            currency: Set(p.currency),
            status: Set(p.status),
            created_at: Set(p.created_at),
            updated_at: Set(p.updated_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_booking(&self, booking_id: &str) -> DomainResult<Option<Payment>> {
        let model = payment::Entity::find()
            .filter(payment::Column::BookingId.eq(booking_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }
}

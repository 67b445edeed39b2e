//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::booking::{Booking, BookingRepository, BookingStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::booking;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> DomainResult<Booking> {
    let status = m
        .status
        .parse::<BookingStatus>()
        .map_err(|e| DomainError::Storage(format!("Booking {}: {}", m.id, e)))?;
    Ok(Booking {
        id: m.id,
        unit_id: m.unit_id,
        customer_id: m.customer_id,
        check_in: m.check_in,
        check_out: m.check_out,
        status,
        total_cents: m.total_cents,
        currency: m.currency,
        guests: m.guests,
        notes: m.notes,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn save(&self, b: Booking) -> DomainResult<()> {
        debug!("Saving booking: {} on unit {}", b.id, b.unit_id);

        let model = booking::ActiveModel {
            id: Set(b.id),
            unit_id: Set(b.unit_id),
            customer_id: Set(b.customer_id),
            check_in: Set(b.check_in),
            check_out: Set(b.check_out),
            status: Set(b.status.as_str().to_string()),
            total_cents: Set(b.total_cents),
            currency: Set(b.currency),
            guests: Set(b.guests),
            notes: Set(b.notes),
            created_at: Set(b.created_at),
            updated_at: Set(b.updated_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>> {
        booking::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> DomainResult<Booking> {
        let existing = booking::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: id.to_string(),
            });
        };

        debug!("Booking {} status {} -> {}", id, existing.status, status);

        let mut active: booking::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await.map_err(db_err)?;
        model_to_domain(updated)
    }

    async fn find_confirmed_for_unit(
        &self,
        unit_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::UnitId.eq(unit_id))
            .filter(booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .filter(booking::Column::CheckIn.lt(to))
            .filter(booking::Column::CheckOut.gt(from))
            .order_by_asc(booking::Column::CheckIn)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_all(
        &self,
        window: Option<(NaiveDate, NaiveDate)>,
    ) -> DomainResult<Vec<Booking>> {
        let mut query = booking::Entity::find();
        if let Some((from, to)) = window {
            query = query
                .filter(booking::Column::CheckIn.lt(to))
                .filter(booking::Column::CheckOut.gt(from));
        }
        let models = query
            .order_by_asc(booking::Column::CheckIn)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn count_confirmed_for_unit(&self, unit_id: &str) -> DomainResult<u64> {
        booking::Entity::find()
            .filter(booking::Column::UnitId.eq(unit_id))
            .filter(booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

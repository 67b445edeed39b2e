//! SeaORM implementation of HoldRepository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::hold::{Hold, HoldRepository, HoldStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::hold;

pub struct SeaOrmHoldRepository {
    db: DatabaseConnection,
}

impl SeaOrmHoldRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: hold::Model) -> DomainResult<Hold> {
    let status = m
        .status
        .parse::<HoldStatus>()
        .map_err(|e| DomainError::Storage(format!("Hold {}: {}", m.id, e)))?;
    Ok(Hold {
        id: m.id,
        unit_id: m.unit_id,
        check_in: m.check_in,
        check_out: m.check_out,
        expires_at: m.expires_at,
        status,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn domain_to_active(h: Hold) -> hold::ActiveModel {
    hold::ActiveModel {
        id: Set(h.id),
        unit_id: Set(h.unit_id),
        check_in: Set(h.check_in),
        check_out: Set(h.check_out),
        expires_at: Set(h.expires_at),
        status: Set(h.status.as_str().to_string()),
        created_at: Set(h.created_at),
        updated_at: Set(h.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── HoldRepository impl ─────────────────────────────────────────

#[async_trait]
impl HoldRepository for SeaOrmHoldRepository {
    async fn save(&self, h: Hold) -> DomainResult<()> {
        debug!("Saving hold: {} on unit {}", h.id, h.unit_id);
        domain_to_active(h).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Hold>> {
        let model = hold::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn update(&self, h: Hold) -> DomainResult<()> {
        debug!("Updating hold: {} -> {}", h.id, h.status);

        let existing = hold::Entity::find_by_id(h.id.clone())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::NotFound {
                entity: "Hold",
                field: "id",
                value: h.id,
            });
        }

        domain_to_active(h).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_live_for_unit(
        &self,
        unit_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Hold>> {
        let models = hold::Entity::find()
            .filter(hold::Column::UnitId.eq(unit_id))
            .filter(hold::Column::Status.eq(HoldStatus::Active.as_str()))
            .filter(hold::Column::ExpiresAt.gt(now))
            .filter(hold::Column::CheckIn.lt(to))
            .filter(hold::Column::CheckOut.gt(from))
            .order_by_asc(hold::Column::CheckIn)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stay::StayRange;
    use crate::domain::unit::{Unit, UnitRepository, UnitType};
    use crate::infrastructure::database::repositories::SeaOrmUnitRepository;
    use crate::infrastructure::database::test_database;
    use chrono::Duration;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    async fn setup() -> (SeaOrmHoldRepository, String) {
        let db = test_database().await;
        let unit = Unit::new("trailer-03", "Trailer 3", UnitType::Trailer, 2);
        let unit_id = unit.id.clone();
        SeaOrmUnitRepository::new(db.clone()).save(unit).await.unwrap();
        (SeaOrmHoldRepository::new(db), unit_id)
    }

    #[tokio::test]
    async fn live_holds_exclude_expired_and_released() {
        let (repo, unit_id) = setup().await;
        let stay = StayRange::new(d(10), d(15)).unwrap();

        let live = Hold::new(&unit_id, stay, Duration::minutes(15));
        let live_id = live.id.clone();
        repo.save(live).await.unwrap();

        let mut stale = Hold::new(&unit_id, stay, Duration::minutes(15));
        stale.expires_at = Utc::now() - Duration::minutes(1);
        repo.save(stale).await.unwrap();

        let mut released = Hold::new(&unit_id, stay, Duration::minutes(15));
        released.cancel(Utc::now()).unwrap();
        repo.save(released).await.unwrap();

        let found = repo
            .find_live_for_unit(&unit_id, d(12), d(20), Utc::now())
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, live_id);

        // back-to-back range does not touch
        let none = repo
            .find_live_for_unit(&unit_id, d(15), d(20), Utc::now())
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn update_persists_status() {
        let (repo, unit_id) = setup().await;
        let mut h = Hold::new(&unit_id, StayRange::new(d(1), d(3)).unwrap(), Duration::minutes(5));
        repo.save(h.clone()).await.unwrap();

        h.convert(Utc::now()).unwrap();
        repo.update(h.clone()).await.unwrap();

        let stored = repo.find_by_id(&h.id).await.unwrap().unwrap();
        assert_eq!(stored.status, HoldStatus::Converted);
    }

    #[tokio::test]
    async fn update_unknown_hold_is_not_found() {
        let (repo, unit_id) = setup().await;
        let h = Hold::new(&unit_id, StayRange::new(d(1), d(3)).unwrap(), Duration::minutes(5));
        let err = repo.update(h).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Hold", .. }));
    }

    #[tokio::test]
    async fn unknown_stored_status_is_storage_error() {
        let (repo, unit_id) = setup().await;
        let h = Hold::new(&unit_id, StayRange::new(d(1), d(3)).unwrap(), Duration::minutes(5));
        let mut model = domain_to_active(h.clone());
        model.status = Set("HELD".to_string());
        model.insert(&repo.db).await.unwrap();

        let err = repo.find_by_id(&h.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        assert!(err.to_string().contains("Invalid hold status 'HELD'"));
    }
}

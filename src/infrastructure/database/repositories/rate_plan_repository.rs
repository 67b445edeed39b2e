//! SeaORM implementation of RatePlanRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::unit_repository::{type_to_domain, type_to_entity};
use crate::domain::rate_plan::{RatePlan, RatePlanRepository};
use crate::domain::unit::UnitType;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::rate_plan;

pub struct SeaOrmRatePlanRepository {
    db: DatabaseConnection,
}

impl SeaOrmRatePlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: rate_plan::Model) -> DomainResult<RatePlan> {
    let scope = RatePlan::scope_from_columns(m.unit_id, m.category.map(type_to_domain))
        .map_err(|e| DomainError::Storage(format!("Rate plan {}: {}", m.id, e)))?;
    Ok(RatePlan {
        id: m.id,
        scope,
        nightly: m.nightly,
        weekly: m.weekly,
        monthly: m.monthly,
        four_month: m.four_month,
        currency: m.currency,
    })
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl RatePlanRepository for SeaOrmRatePlanRepository {
    async fn save(&self, p: RatePlan) -> DomainResult<()> {
        debug!("Saving rate plan: {} ({:?})", p.id, p.scope);

        let model = rate_plan::ActiveModel {
            unit_id: Set(p.unit_id().map(str::to_string)),
            category: Set(p.category().map(type_to_entity)),
            id: Set(p.id),
            nightly: Set(p.nightly),
            weekly: Set(p.weekly),
            monthly: Set(p.monthly),
            four_month: Set(p.four_month),
            currency: Set(p.currency),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_for_unit(&self, unit_id: &str) -> DomainResult<Option<RatePlan>> {
        rate_plan::Entity::find()
            .filter(rate_plan::Column::UnitId.eq(unit_id))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_for_category(&self, category: UnitType) -> DomainResult<Option<RatePlan>> {
        rate_plan::Entity::find()
            .filter(rate_plan::Column::Category.eq(type_to_entity(category)))
            .filter(rate_plan::Column::UnitId.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }
}

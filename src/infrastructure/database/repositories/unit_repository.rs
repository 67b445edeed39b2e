//! SeaORM implementation of UnitRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::unit::{Unit, UnitRepository, UnitType};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::unit;

pub struct SeaOrmUnitRepository {
    db: DatabaseConnection,
}

impl SeaOrmUnitRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn type_to_domain(t: unit::UnitType) -> UnitType {
    match t {
        unit::UnitType::Trailer => UnitType::Trailer,
        unit::UnitType::Cottage1Br => UnitType::Cottage1Br,
        unit::UnitType::Cottage2Br => UnitType::Cottage2Br,
        unit::UnitType::RvSite => UnitType::RvSite,
    }
}

pub(crate) fn type_to_entity(t: UnitType) -> unit::UnitType {
    match t {
        UnitType::Trailer => unit::UnitType::Trailer,
        UnitType::Cottage1Br => unit::UnitType::Cottage1Br,
        UnitType::Cottage2Br => unit::UnitType::Cottage2Br,
        UnitType::RvSite => unit::UnitType::RvSite,
    }
}

fn decode_list(column: &str, raw: &str) -> DomainResult<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|e| DomainError::Storage(format!("Corrupt units.{}: {}", column, e)))
}

fn encode_list(list: &[String]) -> DomainResult<String> {
    serde_json::to_string(list).map_err(|e| DomainError::Storage(e.to_string()))
}

fn model_to_domain(m: unit::Model) -> DomainResult<Unit> {
    Ok(Unit {
        amenities: decode_list("amenities", &m.amenities)?,
        features: decode_list("features", &m.features)?,
        photos: decode_list("photos", &m.photos)?,
        id: m.id,
        slug: m.slug,
        name: m.name,
        unit_type: type_to_domain(m.unit_type),
        capacity: m.capacity,
        beds: m.beds,
        baths: m.baths,
        active: m.active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── UnitRepository impl ─────────────────────────────────────────

#[async_trait]
impl UnitRepository for SeaOrmUnitRepository {
    async fn save(&self, u: Unit) -> DomainResult<()> {
        debug!("Saving unit: {} ({})", u.slug, u.id);

        let model = unit::ActiveModel {
            amenities: Set(encode_list(&u.amenities)?),
            features: Set(encode_list(&u.features)?),
            photos: Set(encode_list(&u.photos)?),
            id: Set(u.id),
            slug: Set(u.slug),
            name: Set(u.name),
            unit_type: Set(type_to_entity(u.unit_type)),
            capacity: Set(u.capacity),
            beds: Set(u.beds),
            baths: Set(u.baths),
            active: Set(u.active),
            created_at: Set(u.created_at),
            updated_at: Set(u.updated_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Unit>> {
        unit::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Unit>> {
        unit::Entity::find()
            .filter(unit::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Unit>> {
        let models = unit::Entity::find()
            .order_by_asc(unit::Column::Slug)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_active_by_type(&self, unit_type: UnitType) -> DomainResult<Vec<Unit>> {
        let models = unit::Entity::find()
            .filter(unit::Column::UnitType.eq(type_to_entity(unit_type)))
            .filter(unit::Column::Active.eq(true))
            .order_by_asc(unit::Column::Slug)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        unit::Entity::find().count(&self.db).await.map_err(db_err)
    }
}

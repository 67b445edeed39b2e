//! Rate plan entity
//!
//! Exactly one of `unit_id` / `category` is set.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::unit::UnitType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rate_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(nullable)]
    pub unit_id: Option<String>,
    #[sea_orm(nullable)]
    pub category: Option<UnitType>,

    /// Cents
    #[sea_orm(nullable)]
    pub nightly: Option<i64>,
    #[sea_orm(nullable)]
    pub weekly: Option<i64>,
    #[sea_orm(nullable)]
    pub monthly: Option<i64>,
    #[sea_orm(nullable)]
    pub four_month: Option<i64>,

    pub currency: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::unit::Entity",
        from = "Column::UnitId",
        to = "super::unit::Column::Id"
    )]
    Unit,
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

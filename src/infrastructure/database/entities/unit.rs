//! Unit entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unit type column
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum UnitType {
    #[sea_orm(string_value = "TRAILER")]
    Trailer,
    #[sea_orm(string_value = "COTTAGE_1BR")]
    Cottage1Br,
    #[sea_orm(string_value = "COTTAGE_2BR")]
    Cottage2Br,
    #[sea_orm(string_value = "RV_SITE")]
    RvSite,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "units")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub unit_type: UnitType,
    pub capacity: i32,

    #[sea_orm(nullable)]
    pub beds: Option<i32>,
    #[sea_orm(nullable)]
    pub baths: Option<f64>,

    /// JSON array of strings
    #[sea_orm(column_type = "Text")]
    pub amenities: String,
    /// JSON array of strings
    #[sea_orm(column_type = "Text")]
    pub features: String,
    /// JSON array of strings
    #[sea_orm(column_type = "Text")]
    pub photos: String,

    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::hold::Entity")]
    Holds,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::hold::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Holds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

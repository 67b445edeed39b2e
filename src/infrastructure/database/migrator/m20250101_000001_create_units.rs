//! Create units table
//!
//! List-valued columns (amenities, features, photos) hold JSON arrays as text.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Units::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Units::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Units::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Units::Name).string().not_null())
                    .col(ColumnDef::new(Units::UnitType).string_len(20).not_null())
                    .col(ColumnDef::new(Units::Capacity).integer().not_null())
                    .col(ColumnDef::new(Units::Beds).integer())
                    .col(ColumnDef::new(Units::Baths).double())
                    .col(ColumnDef::new(Units::Amenities).text().not_null().default("[]"))
                    .col(ColumnDef::new(Units::Features).text().not_null().default("[]"))
                    .col(ColumnDef::new(Units::Photos).text().not_null().default("[]"))
                    .col(
                        ColumnDef::new(Units::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Units::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Units::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_units_type")
                    .table(Units::Table)
                    .col(Units::UnitType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Units::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Units {
    Table,
    Id,
    Slug,
    Name,
    UnitType,
    Capacity,
    Beds,
    Baths,
    Amenities,
    Features,
    Photos,
    Active,
    CreatedAt,
    UpdatedAt,
}

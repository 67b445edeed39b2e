//! Create rate_plans table
//!
//! A plan is either unit-specific (`unit_id`) or a category default
//! (`category`), never both.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_units::Units;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RatePlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RatePlans::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RatePlans::UnitId).string())
                    .col(ColumnDef::new(RatePlans::Category).string_len(20))
                    .col(ColumnDef::new(RatePlans::Nightly).big_integer())
                    .col(ColumnDef::new(RatePlans::Weekly).big_integer())
                    .col(ColumnDef::new(RatePlans::Monthly).big_integer())
                    .col(ColumnDef::new(RatePlans::FourMonth).big_integer())
                    .col(
                        ColumnDef::new(RatePlans::Currency)
                            .string_len(3)
                            .not_null()
                            .default("USD"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rate_plans_unit")
                            .from(RatePlans::Table, RatePlans::UnitId)
                            .to(Units::Table, Units::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rate_plans_unit")
                    .table(RatePlans::Table)
                    .col(RatePlans::UnitId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rate_plans_category")
                    .table(RatePlans::Table)
                    .col(RatePlans::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RatePlans::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RatePlans {
    Table,
    Id,
    UnitId,
    Category,
    Nightly,
    Weekly,
    Monthly,
    FourMonth,
    Currency,
}

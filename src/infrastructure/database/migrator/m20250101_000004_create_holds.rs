//! Create holds table
//!
//! Holds block a unit's dates until `expires_at`. Expiry is evaluated at
//! read time, so no job rewrites `status`.

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
                    .table(Holds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Holds::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Holds::UnitId).string().not_null())
                    .col(ColumnDef::new(Holds::CheckIn).date().not_null())
                    .col(ColumnDef::new(Holds::CheckOut).date().not_null())
                    .col(
                        ColumnDef::new(Holds::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Holds::Status)
                            .string()
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(
                        ColumnDef::new(Holds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Holds::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_holds_unit")
                            .from(Holds::Table, Holds::UnitId)
                            .to(Units::Table, Units::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_holds_unit_status")
                    .table(Holds::Table)
                    .col(Holds::UnitId)
                    .col(Holds::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_holds_expiry")
                    .table(Holds::Table)
                    .col(Holds::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Holds::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Holds {
    Table,
    Id,
    UnitId,
    CheckIn,
    CheckOut,
    ExpiresAt,
    Status,
    CreatedAt,
    UpdatedAt,
}

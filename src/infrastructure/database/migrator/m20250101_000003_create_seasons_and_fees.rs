//! Create seasons and fees tables

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seasons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Seasons::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Seasons::Name).string().not_null())
                    .col(ColumnDef::new(Seasons::StartDate).date().not_null())
                    .col(ColumnDef::new(Seasons::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Seasons::DiscountPct)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seasons_dates")
                    .table(Seasons::Table)
                    .col(Seasons::StartDate)
                    .col(Seasons::EndDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Fees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fees::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fees::Name).string().not_null())
                    .col(ColumnDef::new(Fees::Amount).big_integer().not_null())
                    .col(
                        ColumnDef::new(Fees::PerStay)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Seasons::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Seasons {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    DiscountPct,
}

#[derive(Iden)]
pub enum Fees {
    Table,
    Id,
    Name,
    Amount,
    PerStay,
}

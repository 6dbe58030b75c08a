//! Create tables table
//!
//! Physical dining-room tables. Rows are written once at setup and never
//! mutated afterwards.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tables::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tables::Number).integer().not_null())
                    .col(ColumnDef::new(Tables::Capacity).integer().not_null())
                    .col(ColumnDef::new(Tables::Location).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tables_number")
                    .table(Tables::Table)
                    .col(Tables::Number)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tables::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tables {
    Table,
    Id,
    Number,
    Capacity,
    Location,
}

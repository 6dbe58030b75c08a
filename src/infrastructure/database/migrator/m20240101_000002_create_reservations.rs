//! Create reservations table
//!
//! Time-boxed bookings against dining-room tables. The admission query
//! filters on (table_id, date, status) plus the half-open time interval,
//! so those columns are indexed together.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_tables::Tables;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reservations::CustomerName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::CustomerPhone)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::TableId).integer().not_null())
                    .col(ColumnDef::new(Reservations::Date).date().not_null())
                    .col(ColumnDef::new(Reservations::StartTime).string().not_null())
                    .col(ColumnDef::new(Reservations::EndTime).string().not_null())
                    .col(
                        ColumnDef::new(Reservations::PartySize)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Kind)
                            .string()
                            .not_null()
                            .default("standard"),
                    )
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string()
                            .not_null()
                            .default("confirmed"),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_table")
                            .from(Reservations::Table, Reservations::TableId)
                            .to(Tables::Table, Tables::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_table_date")
                    .table(Reservations::Table)
                    .col(Reservations::TableId)
                    .col(Reservations::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_status")
                    .table(Reservations::Table)
                    .col(Reservations::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    CustomerName,
    CustomerPhone,
    TableId,
    Date,
    StartTime,
    EndTime,
    PartySize,
    Kind,
    Status,
    CreatedAt,
    UpdatedAt,
}

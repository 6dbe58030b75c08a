//! Reservation entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub customer_name: String,
    pub customer_phone: String,
    pub table_id: i32,

    pub date: Date,

    /// Canonical zero-padded 24-hour "HH:MM"; lexicographic order equals
    /// chronological order, so overlap filters compare strings directly.
    pub start_time: String,
    pub end_time: String,

    pub party_size: i32,

    /// Reservation kind: standard, vip, group
    pub kind: String,

    /// Reservation status: confirmed, cancelled
    pub status: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::table::Entity",
        from = "Column::TableId",
        to = "super::table::Column::Id"
    )]
    Table,
}

impl Related<super::table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Table.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

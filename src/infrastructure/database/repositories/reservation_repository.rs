//! SeaORM implementation of ReservationRepository
//!
//! Admission (create/update) runs the confirmed-overlap count and the
//! write inside one database transaction. SQLite serializes writers, so
//! two concurrent admissions for overlapping slots cannot both commit;
//! the loser sees the winner's row and gets `SlotUnavailable`.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::reservation::{
    Reservation, ReservationKind, ReservationRepository, ReservationStatus,
};
use crate::domain::schedule::{self, TimeSlot};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    let start_time = parse_stored_time(m.id, &m.start_time)?;
    let end_time = parse_stored_time(m.id, &m.end_time)?;
    Ok(Reservation {
        id: m.id,
        customer_name: m.customer_name,
        customer_phone: m.customer_phone,
        table_id: m.table_id,
        date: m.date,
        start_time,
        end_time,
        party_size: m.party_size,
        kind: ReservationKind::from_str(&m.kind),
        status: ReservationStatus::from_str(&m.status),
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn parse_stored_time(id: i32, value: &str) -> DomainResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        DomainError::Persistence(format!("corrupt time '{}' in reservation {}", value, id))
    })
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Persistence(format!("Database error: {}", e))
}

fn slot_unavailable(r: &Reservation) -> DomainError {
    DomainError::SlotUnavailable {
        table_id: r.table_id,
        date: r.date,
        start: schedule::canonical(r.start_time),
        end: schedule::canonical(r.end_time),
    }
}

/// Count confirmed reservations on (table_id, date) overlapping `slot`.
///
/// Works over either the pooled connection (advisory probe) or an open
/// transaction (admission). Canonical "HH:MM" strings order correctly,
/// so the half-open overlap predicate stays a string comparison.
async fn count_conflicts<C: ConnectionTrait>(
    conn: &C,
    table_id: i32,
    date: NaiveDate,
    slot: TimeSlot,
    exclude_id: Option<i32>,
) -> DomainResult<u64> {
    let mut query = reservation::Entity::find()
        .filter(reservation::Column::TableId.eq(table_id))
        .filter(reservation::Column::Date.eq(date))
        .filter(reservation::Column::Status.eq(ReservationStatus::Confirmed.as_str()))
        .filter(reservation::Column::StartTime.lt(schedule::canonical(slot.end())))
        .filter(reservation::Column::EndTime.gt(schedule::canonical(slot.start())));
    if let Some(id) = exclude_id {
        query = query.filter(reservation::Column::Id.ne(id));
    }
    query.count(conn).await.map_err(db_err)
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create_if_available(&self, r: Reservation) -> DomainResult<Reservation> {
        let slot = TimeSlot::new(r.start_time, r.end_time)?;

        let txn = self.db.begin().await.map_err(db_err)?;

        let conflicts = count_conflicts(&txn, r.table_id, r.date, slot, None).await?;
        if conflicts > 0 {
            txn.rollback().await.map_err(db_err)?;
            return Err(slot_unavailable(&r));
        }

        let model = reservation::ActiveModel {
            id: NotSet,
            customer_name: Set(r.customer_name.clone()),
            customer_phone: Set(r.customer_phone.clone()),
            table_id: Set(r.table_id),
            date: Set(r.date),
            start_time: Set(schedule::canonical(r.start_time)),
            end_time: Set(schedule::canonical(r.end_time)),
            party_size: Set(r.party_size),
            kind: Set(r.kind.as_str().to_string()),
            status: Set(ReservationStatus::Confirmed.as_str().to_string()),
            created_at: Set(r.created_at),
            updated_at: Set(r.updated_at),
        };
        let stored = model.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!("Reservation {} inserted", stored.id);
        model_to_domain(stored)
    }

    async fn update_if_available(&self, r: Reservation) -> DomainResult<Reservation> {
        debug!("Updating reservation: {}", r.id);
        let slot = TimeSlot::new(r.start_time, r.end_time)?;

        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = reservation::Entity::find_by_id(r.id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let Some(existing) = existing else {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: r.id.to_string(),
            });
        };

        let conflicts = count_conflicts(&txn, r.table_id, r.date, slot, Some(r.id)).await?;
        if conflicts > 0 {
            txn.rollback().await.map_err(db_err)?;
            return Err(slot_unavailable(&r));
        }

        // overwrite in place; created_at is preserved from the stored row
        let model = reservation::ActiveModel {
            id: Set(r.id),
            customer_name: Set(r.customer_name.clone()),
            customer_phone: Set(r.customer_phone.clone()),
            table_id: Set(r.table_id),
            date: Set(r.date),
            start_time: Set(schedule::canonical(r.start_time)),
            end_time: Set(schedule::canonical(r.end_time)),
            party_size: Set(r.party_size),
            kind: Set(r.kind.as_str().to_string()),
            status: Set(ReservationStatus::Confirmed.as_str().to_string()),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        let stored = model.update(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        model_to_domain(stored)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_asc(reservation::Column::Date)
            .order_by_asc(reservation::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn cancel(&self, id: i32) -> DomainResult<()> {
        let existing = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        };

        // already cancelled rows are left as-is
        if existing.status == ReservationStatus::Cancelled.as_str() {
            return Ok(());
        }

        let mut active: reservation::ActiveModel = existing.into();
        active.status = Set(ReservationStatus::Cancelled.as_str().to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn has_conflict(
        &self,
        table_id: i32,
        date: NaiveDate,
        slot: TimeSlot,
        exclude_id: Option<i32>,
    ) -> DomainResult<bool> {
        let conflicts = count_conflicts(&self.db, table_id, date, slot, exclude_id).await?;
        Ok(conflicts > 0)
    }
}

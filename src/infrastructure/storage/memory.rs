//! In-memory repository provider for development and testing

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::schedule::{self, TimeSlot};
use crate::domain::table::{Table, TableRepository};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// DashMap-backed store with the same semantics as the SeaORM provider.
///
/// Admission goes through one async lock, which stands in for the
/// database transaction: the conflict check and the write cannot
/// interleave with another admission.
pub struct InMemoryStore {
    tables: InMemoryTableRepository,
    reservations: InMemoryReservationRepository,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: InMemoryTableRepository::default(),
            reservations: InMemoryReservationRepository::default(),
        }
    }

    /// Store pre-seeded with the default dining room layout.
    pub async fn with_default_tables() -> Self {
        let store = Self::new();
        for (number, capacity, location) in [
            (1, 4, "Window"),
            (2, 2, "Bar"),
            (3, 6, "Garden"),
            (4, 8, "Private area"),
            (5, 4, "Main area"),
        ] {
            // infallible for the in-memory map
            let _ = store.tables.save(Table::new(0, number, capacity, location)).await;
        }
        store
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryStore {
    fn tables(&self) -> &dyn TableRepository {
        &self.tables
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

// ── Tables ──────────────────────────────────────────────────────

#[derive(Default)]
struct InMemoryTableRepository {
    rows: Arc<DashMap<i32, Table>>,
    counter: AtomicI32,
}

#[async_trait]
impl TableRepository for InMemoryTableRepository {
    async fn save(&self, mut table: Table) -> DomainResult<Table> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        table.id = id;
        self.rows.insert(id, table.clone());
        Ok(table)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Table>> {
        Ok(self.rows.get(&id).map(|t| t.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Table>> {
        let mut tables: Vec<Table> = self.rows.iter().map(|t| t.clone()).collect();
        tables.sort_by_key(|t| t.number);
        Ok(tables)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.rows.len() as u64)
    }
}

// ── Reservations ────────────────────────────────────────────────

#[derive(Default)]
struct InMemoryReservationRepository {
    rows: Arc<DashMap<i32, Reservation>>,
    counter: AtomicI32,
    admission: Mutex<()>,
}

impl InMemoryReservationRepository {
    fn conflict_exists(
        &self,
        table_id: i32,
        date: NaiveDate,
        slot: TimeSlot,
        exclude_id: Option<i32>,
    ) -> bool {
        self.rows.iter().any(|r| {
            r.table_id == table_id
                && r.date == date
                && r.status == ReservationStatus::Confirmed
                && Some(r.id) != exclude_id
                && r.start_time < slot.end()
                && r.end_time > slot.start()
        })
    }

    fn not_found(id: i32) -> DomainError {
        DomainError::NotFound {
            entity: "Reservation",
            field: "id",
            value: id.to_string(),
        }
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn create_if_available(&self, mut r: Reservation) -> DomainResult<Reservation> {
        let _guard = self.admission.lock().await;

        let slot = TimeSlot::new(r.start_time, r.end_time)?;
        if self.conflict_exists(r.table_id, r.date, slot, None) {
            return Err(DomainError::SlotUnavailable {
                table_id: r.table_id,
                date: r.date,
                start: schedule::canonical(r.start_time),
                end: schedule::canonical(r.end_time),
            });
        }

        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        r.id = id;
        r.status = ReservationStatus::Confirmed;
        self.rows.insert(id, r.clone());
        Ok(r)
    }

    async fn update_if_available(&self, mut r: Reservation) -> DomainResult<Reservation> {
        let _guard = self.admission.lock().await;

        let created_at = self
            .rows
            .get(&r.id)
            .map(|existing| existing.created_at)
            .ok_or_else(|| Self::not_found(r.id))?;

        let slot = TimeSlot::new(r.start_time, r.end_time)?;
        if self.conflict_exists(r.table_id, r.date, slot, Some(r.id)) {
            return Err(DomainError::SlotUnavailable {
                table_id: r.table_id,
                date: r.date,
                start: schedule::canonical(r.start_time),
                end: schedule::canonical(r.end_time),
            });
        }

        r.status = ReservationStatus::Confirmed;
        r.created_at = created_at;
        r.updated_at = Utc::now();
        self.rows.insert(r.id, r.clone());
        Ok(r)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        Ok(self.rows.get(&id).map(|r| r.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let mut reservations: Vec<Reservation> = self.rows.iter().map(|r| r.clone()).collect();
        reservations.sort_by_key(|r| (r.date, r.start_time));
        Ok(reservations)
    }

    async fn cancel(&self, id: i32) -> DomainResult<()> {
        let mut entry = self.rows.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        if entry.is_confirmed() {
            entry.cancel();
        }
        Ok(())
    }

    async fn has_conflict(
        &self,
        table_id: i32,
        date: NaiveDate,
        slot: TimeSlot,
        exclude_id: Option<i32>,
    ) -> DomainResult<bool> {
        Ok(self.conflict_exists(table_id, date, slot, exclude_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reservation::ReservationKind;
    use chrono::NaiveTime;

    fn reservation(table_id: i32, start: &str, end: &str) -> Reservation {
        Reservation::new(
            0,
            "Ada Lovelace",
            "555-0100",
            table_id,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            2,
            ReservationKind::Standard,
        )
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let repo = InMemoryReservationRepository::default();
        let first = repo.create_if_available(reservation(1, "12:00", "13:00")).await.unwrap();
        let second = repo.create_if_available(reservation(1, "13:00", "14:00")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn rejects_overlap_on_same_table_only() {
        let repo = InMemoryReservationRepository::default();
        repo.create_if_available(reservation(1, "19:00", "20:00")).await.unwrap();

        let err = repo
            .create_if_available(reservation(1, "19:30", "20:30"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotUnavailable { .. }));

        // same slot on another table is fine
        assert!(repo.create_if_available(reservation(2, "19:30", "20:30")).await.is_ok());
    }

    #[tokio::test]
    async fn cancel_is_idempotent_but_unknown_id_fails() {
        let repo = InMemoryReservationRepository::default();
        let stored = repo.create_if_available(reservation(1, "19:00", "20:00")).await.unwrap();

        repo.cancel(stored.id).await.unwrap();
        repo.cancel(stored.id).await.unwrap();
        let after = repo.find_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(after.status, ReservationStatus::Cancelled);

        assert!(matches!(
            repo.cancel(999).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn find_all_orders_by_date_then_start() {
        let repo = InMemoryReservationRepository::default();
        let mut late = reservation(1, "20:00", "21:00");
        late.date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        repo.create_if_available(late).await.unwrap();
        repo.create_if_available(reservation(1, "18:00", "19:00")).await.unwrap();
        repo.create_if_available(reservation(2, "12:00", "13:00")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let keys: Vec<_> = all
            .iter()
            .map(|r| (r.date, schedule::canonical(r.start_time)))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}

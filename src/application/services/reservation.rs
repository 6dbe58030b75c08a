//! Reservation business logic service
//!
//! Owns the admission rules: the ordered validation chain for new and
//! edited reservations, availability queries, cancellation, and the
//! canned templates. Persistence re-checks availability atomically at
//! write time, so every check made here is advisory.

use std::sync::Arc;

use chrono::NaiveDate;
use metrics::counter;
use tracing::{debug, info};

use crate::domain::reservation::{self, Reservation, ReservationDraft};
use crate::domain::schedule::TimeSlot;
use crate::domain::{DomainError, DomainResult, RepositoryProvider, Table};

/// Service for table and reservation operations
pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Tables & availability ──────────────────────────────────

    pub async fn list_tables(&self) -> DomainResult<Vec<Table>> {
        self.repos.tables().find_all().await
    }

    pub async fn get_table(&self, id: i32) -> DomainResult<Table> {
        self.repos
            .tables()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Table",
                field: "id",
                value: id.to_string(),
            })
    }

    /// Is the table free on `date` for the half-open [start, end) slot?
    ///
    /// Accepts times in either textual form; `exclude_id` removes one
    /// reservation from consideration (edit flows). The answer is
    /// advisory: the store repeats the check inside the write.
    pub async fn is_available(
        &self,
        table_id: i32,
        date: NaiveDate,
        start: &str,
        end: &str,
        exclude_id: Option<i32>,
    ) -> DomainResult<bool> {
        self.get_table(table_id).await?;
        let slot = TimeSlot::parse(start, end)?;

        let conflict = self
            .repos
            .reservations()
            .has_conflict(table_id, date, slot, exclude_id)
            .await?;
        counter!("reserva_availability_checks_total").increment(1);
        debug!(
            "Checking table {} on {} slot {}: {}",
            table_id,
            date,
            slot,
            if conflict { "unavailable" } else { "available" }
        );
        Ok(!conflict)
    }

    /// All tables free for the given slot.
    pub async fn list_available_tables(
        &self,
        date: NaiveDate,
        start: &str,
        end: &str,
    ) -> DomainResult<Vec<Table>> {
        let slot = TimeSlot::parse(start, end)?;

        let mut available = Vec::new();
        for table in self.repos.tables().find_all().await? {
            let conflict = self
                .repos
                .reservations()
                .has_conflict(table.id, date, slot, None)
                .await?;
            if !conflict {
                available.push(table);
            }
        }
        debug!(
            "Available tables for {} slot {}: {:?}",
            date,
            slot,
            available.iter().map(|t| t.id).collect::<Vec<_>>()
        );
        Ok(available)
    }

    // ── Reservation lifecycle ──────────────────────────────────

    /// Validate a draft and persist it as a confirmed reservation.
    pub async fn create_reservation(&self, draft: ReservationDraft) -> DomainResult<Reservation> {
        let candidate = self.validate(draft, None).await?;
        let stored = self
            .repos
            .reservations()
            .create_if_available(candidate)
            .await?;

        counter!("reserva_reservations_created_total").increment(1);
        info!(
            "Reservation {} created: table={} {} {}-{} ({} guests)",
            stored.id,
            stored.table_id,
            stored.date,
            stored.start_time.format("%H:%M"),
            stored.end_time.format("%H:%M"),
            stored.party_size
        );
        Ok(stored)
    }

    /// Re-validate as if newly created (excluding `id` from the overlap
    /// check) and overwrite the stored record in place.
    pub async fn update_reservation(
        &self,
        id: i32,
        draft: ReservationDraft,
    ) -> DomainResult<Reservation> {
        // unknown ids fail before any field validation
        self.get_reservation(id).await?;

        let mut candidate = self.validate(draft, Some(id)).await?;
        candidate.id = id;
        let stored = self
            .repos
            .reservations()
            .update_if_available(candidate)
            .await?;

        info!("Reservation {} updated", stored.id);
        Ok(stored)
    }

    /// Cancel by ID; idempotent in effect for already cancelled rows.
    pub async fn cancel_reservation(&self, id: i32) -> DomainResult<()> {
        self.repos.reservations().cancel(id).await?;
        counter!("reserva_reservations_cancelled_total").increment(1);
        info!("Reservation {} cancelled", id);
        Ok(())
    }

    pub async fn get_reservation(&self, id: i32) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            })
    }

    /// All reservations ordered by (date, start_time) ascending.
    pub async fn list_reservations(&self) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_all().await
    }

    // ── Templates ──────────────────────────────────────────────

    pub fn templates(&self) -> Vec<ReservationDraft> {
        reservation::all_templates()
    }

    /// Fresh clone of the named preset; `InvalidTemplate` otherwise.
    pub fn template(&self, kind: &str) -> DomainResult<ReservationDraft> {
        reservation::template_by_name(kind)
    }

    // ── Validation chain ───────────────────────────────────────

    /// The ordered admission checks, short-circuiting at the first
    /// failure:
    ///
    /// 1. time normalization (`Format`)
    /// 2. start < end (`InvalidRange`)
    /// 3. operating hours (`OutOfHours`)
    /// 4. party size vs table capacity (`CapacityExceeded`; the table
    ///    lookup itself can yield `NotFound`)
    /// 5. availability, excluding self on edit (`SlotUnavailable`)
    async fn validate(
        &self,
        draft: ReservationDraft,
        exclude_id: Option<i32>,
    ) -> DomainResult<Reservation> {
        let customer_name = required(draft.customer_name, "customer_name")?;
        let customer_phone = required(draft.customer_phone, "customer_phone")?;
        let table_id = required(draft.table_id, "table_id")?;
        let date = required(draft.date, "date")?;
        let start_raw = required(draft.start_time, "start_time")?;
        let end_raw = required(draft.end_time, "end_time")?;
        let party_size = required(draft.party_size, "party_size")?;
        let kind = draft.kind.unwrap_or_default();

        let slot = TimeSlot::parse(&start_raw, &end_raw)?;
        slot.check_operating_hours()?;

        let table = self.get_table(table_id).await?;
        if !table.fits(party_size) {
            return Err(DomainError::CapacityExceeded {
                requested: party_size,
                limit: table.capacity,
            });
        }

        let conflict = self
            .repos
            .reservations()
            .has_conflict(table_id, date, slot, exclude_id)
            .await?;
        if conflict {
            counter!("reserva_admissions_rejected_total").increment(1);
            return Err(DomainError::SlotUnavailable {
                table_id,
                date,
                start: slot.start().format("%H:%M").to_string(),
                end: slot.end().format("%H:%M").to_string(),
            });
        }

        Ok(Reservation::new(
            0,
            customer_name,
            customer_phone,
            table_id,
            date,
            slot.start(),
            slot.end(),
            party_size,
            kind,
        ))
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::Validation(format!("missing field: {}", field)))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reservation::{ReservationBuilder, ReservationKind, ReservationStatus};
    use crate::infrastructure::storage::InMemoryStore;

    async fn service() -> ReservationService {
        let store = InMemoryStore::with_default_tables().await;
        ReservationService::new(Arc::new(store))
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn draft(table_id: i32, start: &str, end: &str, party_size: i32) -> ReservationDraft {
        ReservationBuilder::new()
            .customer_info("Ada Lovelace", "555-0100")
            .table(table_id)
            .date_time(date(), start, end)
            .party_size(party_size)
            .kind(ReservationKind::Standard)
            .build()
    }

    #[tokio::test]
    async fn create_confirms_and_assigns_id() {
        let svc = service().await;
        let stored = svc.create_reservation(draft(1, "19:00", "20:00", 2)).await.unwrap();
        assert!(stored.id > 0);
        assert_eq!(stored.status, ReservationStatus::Confirmed);
        assert_eq!(stored.start_time.format("%H:%M").to_string(), "19:00");
    }

    #[tokio::test]
    async fn accepts_twelve_hour_input_and_normalizes() {
        let svc = service().await;
        let stored = svc
            .create_reservation(draft(1, "07:00 PM", "09:00 PM", 2))
            .await
            .unwrap();
        assert_eq!(stored.start_time.format("%H:%M").to_string(), "19:00");
        assert_eq!(stored.end_time.format("%H:%M").to_string(), "21:00");
    }

    #[tokio::test]
    async fn validation_chain_order_and_errors() {
        let svc = service().await;

        // 1. format
        assert!(matches!(
            svc.create_reservation(draft(1, "late", "20:00", 2)).await.unwrap_err(),
            DomainError::Format { field: "start_time", .. }
        ));
        // 2. ordering beats hours: both are wrong here, range reported first
        assert!(matches!(
            svc.create_reservation(draft(1, "23:00", "09:00", 2)).await.unwrap_err(),
            DomainError::InvalidRange { .. }
        ));
        // 3. hours
        assert!(matches!(
            svc.create_reservation(draft(1, "09:59", "11:00", 2)).await.unwrap_err(),
            DomainError::OutOfHours { .. }
        ));
        assert!(matches!(
            svc.create_reservation(draft(1, "21:00", "22:01", 2)).await.unwrap_err(),
            DomainError::OutOfHours { .. }
        ));
        // 4. capacity (table 1 seats 4); reported before availability
        let err = svc.create_reservation(draft(1, "19:00", "20:00", 5)).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::CapacityExceeded { requested: 5, limit: 4 }
        ));
        // missing field
        let mut incomplete = draft(1, "19:00", "20:00", 2);
        incomplete.customer_name = None;
        assert!(matches!(
            svc.create_reservation(incomplete).await.unwrap_err(),
            DomainError::Validation(_)
        ));
        // unknown table
        assert!(matches!(
            svc.create_reservation(draft(42, "19:00", "20:00", 2)).await.unwrap_err(),
            DomainError::NotFound { entity: "Table", .. }
        ));
    }

    #[tokio::test]
    async fn hours_boundary_is_inclusive() {
        let svc = service().await;
        assert!(svc.create_reservation(draft(1, "10:00", "22:00", 2)).await.is_ok());
    }

    #[tokio::test]
    async fn capacity_boundary_accepts_exact_fit() {
        let svc = service().await;
        assert!(svc.create_reservation(draft(1, "19:00", "20:00", 4)).await.is_ok());
    }

    #[tokio::test]
    async fn touching_slots_are_admitted_overlapping_are_not() {
        let svc = service().await;
        svc.create_reservation(draft(1, "19:00", "20:00", 2)).await.unwrap();

        assert!(svc.is_available(1, date(), "20:00", "21:00", None).await.unwrap());
        assert!(!svc.is_available(1, date(), "19:30", "20:30", None).await.unwrap());

        assert!(svc.create_reservation(draft(1, "20:00", "21:00", 2)).await.is_ok());
        assert!(matches!(
            svc.create_reservation(draft(1, "19:30", "20:30", 2)).await.unwrap_err(),
            DomainError::SlotUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn cancellation_is_monotonic_for_availability() {
        let svc = service().await;
        let stored = svc.create_reservation(draft(1, "19:00", "20:00", 2)).await.unwrap();

        assert!(!svc.is_available(1, date(), "19:30", "20:30", None).await.unwrap());
        svc.cancel_reservation(stored.id).await.unwrap();
        assert!(svc.is_available(1, date(), "19:30", "20:30", None).await.unwrap());
        // still free for queries that were already free
        assert!(svc.is_available(1, date(), "20:00", "21:00", None).await.unwrap());
    }

    #[tokio::test]
    async fn cancel_unknown_id_fails_cancel_twice_is_noop() {
        let svc = service().await;
        let stored = svc.create_reservation(draft(1, "19:00", "20:00", 2)).await.unwrap();

        svc.cancel_reservation(stored.id).await.unwrap();
        svc.cancel_reservation(stored.id).await.unwrap();
        assert_eq!(
            svc.get_reservation(stored.id).await.unwrap().status,
            ReservationStatus::Cancelled
        );

        assert!(matches!(
            svc.cancel_reservation(999).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn edit_excludes_self_from_overlap_check() {
        let svc = service().await;
        let stored = svc.create_reservation(draft(1, "19:00", "20:00", 2)).await.unwrap();

        // same table, date, and slot; only the name changes
        let mut edit = draft(1, "19:00", "20:00", 2);
        edit.customer_name = Some("Grace Hopper".into());
        let updated = svc.update_reservation(stored.id, edit).await.unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.customer_name, "Grace Hopper");
        assert_eq!(updated.status, ReservationStatus::Confirmed);
    }

    #[tokio::test]
    async fn edit_still_collides_with_other_reservations() {
        let svc = service().await;
        svc.create_reservation(draft(1, "19:00", "20:00", 2)).await.unwrap();
        let second = svc.create_reservation(draft(1, "20:00", "21:00", 2)).await.unwrap();

        let err = svc
            .update_reservation(second.id, draft(1, "19:30", "20:30", 2))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotUnavailable { .. }));

        // failed update leaves the stored record untouched
        let unchanged = svc.get_reservation(second.id).await.unwrap();
        assert_eq!(unchanged.start_time.format("%H:%M").to_string(), "20:00");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = service().await;
        assert!(matches!(
            svc.update_reservation(77, draft(1, "19:00", "20:00", 2)).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn available_tables_filters_only_conflicting_table() {
        let svc = service().await;
        svc.create_reservation(draft(1, "19:00", "20:00", 2)).await.unwrap();

        let available = svc
            .list_available_tables(date(), "19:30", "20:30")
            .await
            .unwrap();
        let ids: Vec<i32> = available.iter().map(|t| t.id).collect();
        assert!(!ids.contains(&1));
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn list_is_ordered_by_date_then_start() {
        let svc = service().await;
        let mut next_day = draft(2, "12:00", "13:00", 2);
        next_day.date = NaiveDate::from_ymd_opt(2024, 1, 2);
        svc.create_reservation(next_day).await.unwrap();
        svc.create_reservation(draft(1, "20:00", "21:00", 2)).await.unwrap();
        svc.create_reservation(draft(2, "11:00", "12:00", 2)).await.unwrap();

        let all = svc.list_reservations().await.unwrap();
        let keys: Vec<_> = all.iter().map(|r| (r.date, r.start_time)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[tokio::test]
    async fn end_to_end_conflict_then_cancel_then_retry() {
        let svc = service().await;

        let first = svc.create_reservation(draft(1, "19:00", "20:00", 2)).await.unwrap();
        assert_eq!(first.status, ReservationStatus::Confirmed);

        let conflict = svc.create_reservation(draft(1, "19:30", "20:30", 2)).await;
        assert!(matches!(
            conflict.unwrap_err(),
            DomainError::SlotUnavailable { .. }
        ));

        svc.cancel_reservation(first.id).await.unwrap();

        let retry = svc.create_reservation(draft(1, "19:30", "20:30", 2)).await.unwrap();
        assert_eq!(retry.status, ReservationStatus::Confirmed);
    }

    #[tokio::test]
    async fn template_lookup_and_unknown_kind() {
        let svc = service().await;
        let vip = svc.template("vip").unwrap();
        assert_eq!(vip.start_time.as_deref(), Some("20:00"));
        assert_eq!(svc.templates().len(), 3);
        assert!(matches!(
            svc.template("brunch").unwrap_err(),
            DomainError::InvalidTemplate(_)
        ));
    }

    #[tokio::test]
    async fn template_feeds_builder_into_admission() {
        let svc = service().await;
        let preset = svc.template("group").unwrap();
        let mut draft = ReservationBuilder::from_draft(preset)
            .customer_info("Ada Lovelace", "555-0100")
            .table(4) // private area, seats 8
            .build();
        draft.date = Some(date());

        let stored = svc.create_reservation(draft).await.unwrap();
        assert_eq!(stored.party_size, 8);
        assert_eq!(stored.kind, ReservationKind::Group);
    }
}

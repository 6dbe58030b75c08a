//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::Reservation;
use crate::domain::schedule::TimeSlot;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a confirmed reservation if the slot is still free.
    ///
    /// The overlap check against confirmed rows and the insert must commit
    /// as one atomic unit, so two concurrent admissions for overlapping
    /// slots cannot both succeed. Returns the stored reservation with its
    /// assigned ID, or `SlotUnavailable`.
    async fn create_if_available(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// Overwrite an existing reservation in place if the (possibly new)
    /// slot is free, excluding the reservation itself from the overlap
    /// check. Same atomicity contract as [`create_if_available`].
    ///
    /// [`create_if_available`]: ReservationRepository::create_if_available
    async fn update_if_available(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// All reservations (any status), ordered by (date, start_time) ascending
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Set status = cancelled by ID. Idempotent on an already cancelled
    /// reservation; `NotFound` for an unknown ID.
    async fn cancel(&self, id: i32) -> DomainResult<()>;

    /// Advisory overlap probe: does any confirmed reservation on
    /// (table_id, date) overlap `slot`, excluding `exclude_id` if given?
    async fn has_conflict(
        &self,
        table_id: i32,
        date: NaiveDate,
        slot: TimeSlot,
        exclude_id: Option<i32>,
    ) -> DomainResult<bool>;
}

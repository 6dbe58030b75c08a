//! Table API DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Table;

/// A dining-room table
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TableResponse {
    /// Unique table ID
    pub id: i32,
    /// Table number shown to staff and guests
    pub number: i32,
    /// Maximum party size
    pub capacity: i32,
    /// Where the table sits (e.g. `Window`, `Bar`)
    pub location: String,
}

impl From<Table> for TableResponse {
    fn from(t: Table) -> Self {
        Self {
            id: t.id,
            number: t.number,
            capacity: t.capacity,
            location: t.location,
        }
    }
}

/// Slot parameters for availability queries
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SlotQuery {
    /// Reservation date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Slot start, `HH:MM` or `HH:MM AM/PM`
    pub start_time: String,
    /// Slot end, `HH:MM` or `HH:MM AM/PM`
    pub end_time: String,
    /// Reservation ID to leave out of the overlap check (edit flows)
    pub exclude: Option<i32>,
}

/// Availability answer for one table and slot
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub table_id: i32,
    pub date: NaiveDate,
    /// Canonical 24-hour slot bounds
    pub start_time: String,
    pub end_time: String,
    /// `true` if no confirmed reservation overlaps the slot
    pub available: bool,
}

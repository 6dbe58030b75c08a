//! Reservation API DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::{Reservation, ReservationBuilder, ReservationDraft, ReservationKind};
use crate::domain::schedule;
use crate::domain::{DomainError, DomainResult};

/// Create/update payload; the same validation chain runs in both cases.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ReservationRequest {
    /// Guest name
    #[validate(length(min = 1, max = 120))]
    pub customer_name: String,
    /// Guest phone number
    #[validate(length(min = 1, max = 40))]
    pub customer_phone: String,
    /// ID of the table to reserve
    pub table_id: i32,
    /// Reservation date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Slot start, `HH:MM` or `HH:MM AM/PM`
    pub start_time: String,
    /// Slot end, `HH:MM` or `HH:MM AM/PM`
    pub end_time: String,
    /// Number of guests
    #[validate(range(min = 1))]
    pub party_size: i32,
    /// Reservation kind: `standard`, `vip`, `group` (default `standard`)
    pub kind: Option<String>,
}

impl ReservationRequest {
    pub fn into_draft(self) -> DomainResult<ReservationDraft> {
        let kind = match self.kind.as_deref() {
            None | Some("") => ReservationKind::Standard,
            Some(s) => ReservationKind::parse(s)
                .ok_or_else(|| DomainError::Validation(format!("unknown reservation kind: {}", s)))?,
        };
        Ok(ReservationBuilder::new()
            .customer_info(self.customer_name, self.customer_phone)
            .table(self.table_id)
            .date_time(self.date, self.start_time, self.end_time)
            .party_size(self.party_size)
            .kind(kind)
            .build())
    }
}

/// A stored reservation
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    /// Unique reservation ID
    pub id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub table_id: i32,
    pub date: NaiveDate,
    /// Canonical 24-hour slot start (`19:00`)
    pub start_time: String,
    /// Canonical 24-hour slot end
    pub end_time: String,
    /// 12-hour display form (`07:00 PM`)
    pub start_time_display: String,
    pub end_time_display: String,
    pub party_size: i32,
    /// `standard`, `vip`, or `group`
    pub kind: String,
    /// `confirmed` or `cancelled`
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            customer_name: r.customer_name,
            customer_phone: r.customer_phone,
            table_id: r.table_id,
            date: r.date,
            start_time: schedule::canonical(r.start_time),
            end_time: schedule::canonical(r.end_time),
            start_time_display: schedule::display_12h(r.start_time),
            end_time_display: schedule::display_12h(r.end_time),
            party_size: r.party_size,
            kind: r.kind.to_string(),
            status: r.status.to_string(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// A canned reservation preset, ready to prefill the booking form
#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateResponse {
    /// Preset name: `standard`, `vip`, `group`
    pub kind: String,
    /// Preset display label
    pub display_name: String,
    /// Canonical slot start
    pub start_time: String,
    /// Canonical slot end
    pub end_time: String,
    /// Suggested party size
    pub party_size: i32,
}

impl From<ReservationDraft> for TemplateResponse {
    fn from(d: ReservationDraft) -> Self {
        let kind = d.kind.unwrap_or_default();
        Self {
            kind: kind.to_string(),
            display_name: kind.display_name().to_string(),
            start_time: d.canonical_start().unwrap_or_default(),
            end_time: d.canonical_end().unwrap_or_default(),
            party_size: d.party_size.unwrap_or_default(),
        }
    }
}

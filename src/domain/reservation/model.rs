//! Reservation domain entity

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::schedule;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Active booking; blocks overlapping reservations on the same table
    Confirmed,
    /// Terminal for scheduling purposes; no longer blocks anything
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "confirmed" => Self::Confirmed,
            _ => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reservation kind (plain tag, no behavior beyond its display string)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReservationKind {
    #[default]
    Standard,
    Vip,
    Group,
}

impl ReservationKind {
    pub const ALL: [ReservationKind; 3] = [Self::Standard, Self::Vip, Self::Group];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Vip => "vip",
            Self::Group => "group",
        }
    }

    /// Parse user input; `None` for an unknown kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            "vip" => Some(Self::Vip),
            "group" => Some(Self::Group),
            _ => None,
        }
    }

    /// Lenient decode for stored rows; unknown tags fall back to standard.
    pub fn from_str(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Vip => "VIP",
            Self::Group => "Group",
        }
    }
}

impl std::fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted table reservation.
///
/// Owned by the store; values held elsewhere are transient copies that are
/// reconciled back through explicit save/update calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Unique reservation ID (assigned by the store on insert)
    pub id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    /// Foreign key to the reserved table
    pub table_id: i32,
    pub date: NaiveDate,
    /// Start of the half-open [start, end) slot
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub party_size: i32,
    pub kind: ReservationKind,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        table_id: i32,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        party_size: i32,
        kind: ReservationKind,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            table_id,
            date,
            start_time,
            end_time,
            party_size,
            kind,
            status: ReservationStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Cancel this reservation
    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }
}

/// Unvalidated reservation fields accumulated by [`ReservationBuilder`]
/// or pre-filled from a template.
///
/// Times are kept as the raw text the caller supplied; normalization is
/// part of the validation chain, not of field accumulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub table_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub party_size: Option<i32>,
    pub kind: Option<ReservationKind>,
    pub status: ReservationStatus,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            customer_name: None,
            customer_phone: None,
            table_id: None,
            date: None,
            start_time: None,
            end_time: None,
            party_size: None,
            kind: None,
            status: ReservationStatus::Confirmed,
        }
    }
}

/// Step-by-step reservation construction.
///
/// Any subset of fields may be set in any order; nothing is validated
/// until the draft reaches the service's save path, so the builder itself
/// never fails.
#[derive(Debug, Default)]
pub struct ReservationBuilder {
    draft: ReservationDraft,
}

impl ReservationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing draft (e.g. a template clone).
    pub fn from_draft(draft: ReservationDraft) -> Self {
        Self { draft }
    }

    pub fn customer_info(mut self, name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.draft.customer_name = Some(name.into());
        self.draft.customer_phone = Some(phone.into());
        self
    }

    pub fn table(mut self, table_id: i32) -> Self {
        self.draft.table_id = Some(table_id);
        self
    }

    pub fn date_time(
        mut self,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        self.draft.date = Some(date);
        self.draft.start_time = Some(start_time.into());
        self.draft.end_time = Some(end_time.into());
        self
    }

    pub fn party_size(mut self, party_size: i32) -> Self {
        self.draft.party_size = Some(party_size);
        self
    }

    pub fn kind(mut self, kind: ReservationKind) -> Self {
        self.draft.kind = Some(kind);
        self
    }

    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.draft.status = status;
        self
    }

    pub fn build(self) -> ReservationDraft {
        self.draft
    }
}

impl ReservationDraft {
    /// Canonicalized start time, if set and parseable; for display only.
    pub fn canonical_start(&self) -> Option<String> {
        self.start_time
            .as_deref()
            .and_then(|s| schedule::parse_time("start_time", s).ok())
            .map(schedule::canonical)
    }

    pub fn canonical_end(&self) -> Option<String> {
        self.end_time
            .as_deref()
            .and_then(|s| schedule::parse_time("end_time", s).ok())
            .map(schedule::canonical)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reservation() -> Reservation {
        Reservation::new(
            1,
            "Ada Lovelace",
            "555-0100",
            1,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            2,
            ReservationKind::Standard,
        )
    }

    #[test]
    fn new_reservation_is_confirmed() {
        let r = sample_reservation();
        assert!(r.is_confirmed());
        assert_eq!(r.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn cancel_sets_cancelled() {
        let mut r = sample_reservation();
        r.cancel();
        assert_eq!(r.status, ReservationStatus::Cancelled);
        assert!(!r.is_confirmed());
    }

    #[test]
    fn status_round_trip() {
        for status in &[ReservationStatus::Confirmed, ReservationStatus::Cancelled] {
            assert_eq!(&ReservationStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_cancelled() {
        assert_eq!(
            ReservationStatus::from_str("no-show"),
            ReservationStatus::Cancelled
        );
    }

    #[test]
    fn kind_round_trip() {
        for kind in ReservationKind::ALL {
            assert_eq!(ReservationKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ReservationKind::parse("banquet"), None);
        assert_eq!(ReservationKind::from_str("banquet"), ReservationKind::Standard);
    }

    #[test]
    fn builder_accumulates_any_subset_in_any_order() {
        let draft = ReservationBuilder::new()
            .party_size(4)
            .customer_info("Grace Hopper", "555-0101")
            .table(3)
            .build();
        assert_eq!(draft.customer_name.as_deref(), Some("Grace Hopper"));
        assert_eq!(draft.table_id, Some(3));
        assert_eq!(draft.party_size, Some(4));
        // untouched fields stay unset, status defaults to confirmed
        assert!(draft.date.is_none());
        assert!(draft.start_time.is_none());
        assert_eq!(draft.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn builder_keeps_raw_time_text() {
        let draft = ReservationBuilder::new()
            .date_time(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                "07:00 PM",
                "09:00 PM",
            )
            .build();
        // accumulation never normalizes or rejects
        assert_eq!(draft.start_time.as_deref(), Some("07:00 PM"));
        assert_eq!(draft.canonical_start().as_deref(), Some("19:00"));
        assert_eq!(draft.canonical_end().as_deref(), Some("21:00"));
    }
}

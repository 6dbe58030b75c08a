//! Time-slot normalization and overlap logic
//!
//! All reservation times are minute-granular wall-clock times on a single
//! day. Input is accepted in 24-hour ("19:30") or 12-hour ("07:30 PM")
//! form and normalized to the canonical zero-padded 24-hour form before
//! any comparison or storage. Canonical strings compare lexicographically
//! in chronological order, which keeps the SQL overlap predicate a plain
//! string comparison.

use chrono::NaiveTime;

use crate::domain::{DomainError, DomainResult};

/// First admissible reservation start (restaurant opens).
pub const OPENING_TIME: NaiveTime = match NaiveTime::from_hms_opt(10, 0, 0) {
    Some(t) => t,
    None => panic!("invalid opening time"),
};

/// Last admissible reservation end (restaurant closes).
pub const CLOSING_TIME: NaiveTime = match NaiveTime::from_hms_opt(22, 0, 0) {
    Some(t) => t,
    None => panic!("invalid closing time"),
};

/// Parse a reservation time in either accepted textual form.
///
/// `field` names the request field for error reporting.
pub fn parse_time(field: &'static str, value: &str) -> DomainResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%I:%M %p"))
        .map_err(|_| DomainError::Format {
            field,
            value: value.to_string(),
        })
}

/// Canonical 24-hour "HH:MM" form used for storage and comparison.
pub fn canonical(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// 12-hour "HH:MM AM/PM" form used for display.
pub fn display_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// A half-open [start, end) time interval on a single day.
///
/// Construction enforces strict ordering; the operating-hours check is a
/// separate step so callers get the more specific error first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::InvalidRange {
                start: canonical(start),
                end: canonical(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Normalize two textual times into a slot.
    pub fn parse(start: &str, end: &str) -> DomainResult<Self> {
        let start = parse_time("start_time", start)?;
        let end = parse_time("end_time", end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Half-open interval overlap: touching slots do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn within_operating_hours(&self) -> bool {
        self.start >= OPENING_TIME && self.end <= CLOSING_TIME
    }

    pub fn check_operating_hours(&self) -> DomainResult<()> {
        if self.within_operating_hours() {
            Ok(())
        } else {
            Err(DomainError::OutOfHours {
                opening: canonical(OPENING_TIME),
                closing: canonical(CLOSING_TIME),
            })
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", canonical(self.start), canonical(self.end))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse(start, end).unwrap()
    }

    #[test]
    fn parses_24_hour_form() {
        let t = parse_time("start_time", "19:30").unwrap();
        assert_eq!(canonical(t), "19:30");
    }

    #[test]
    fn parses_12_hour_form() {
        let t = parse_time("start_time", "07:30 PM").unwrap();
        assert_eq!(canonical(t), "19:30");
        let t = parse_time("start_time", "10:00 AM").unwrap();
        assert_eq!(canonical(t), "10:00");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let t = parse_time("start_time", " 19:00 ").unwrap();
        assert_eq!(canonical(t), "19:00");
    }

    #[test]
    fn rejects_malformed_time() {
        let err = parse_time("start_time", "25:99").unwrap_err();
        assert!(matches!(err, DomainError::Format { field: "start_time", .. }));
        assert!(parse_time("end_time", "seven pm").is_err());
        assert!(parse_time("end_time", "").is_err());
    }

    #[test]
    fn twelve_hour_round_trip() {
        let t = parse_time("start_time", "20:00").unwrap();
        assert_eq!(display_12h(t), "08:00 PM");
    }

    #[test]
    fn rejects_inverted_and_empty_ranges() {
        assert!(matches!(
            TimeSlot::parse("20:00", "19:00").unwrap_err(),
            DomainError::InvalidRange { .. }
        ));
        assert!(matches!(
            TimeSlot::parse("19:00", "19:00").unwrap_err(),
            DomainError::InvalidRange { .. }
        ));
    }

    #[test]
    fn touching_slots_do_not_overlap() {
        let first = slot("19:00", "20:00");
        let second = slot("20:00", "21:00");
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn straddling_slots_overlap() {
        let booked = slot("19:00", "20:00");
        assert!(slot("19:30", "20:30").overlaps(&booked));
        assert!(booked.overlaps(&slot("19:30", "20:30")));
        // containment counts too
        assert!(slot("18:00", "21:00").overlaps(&booked));
        assert!(slot("19:15", "19:45").overlaps(&booked));
    }

    #[test]
    fn operating_hours_bounds_are_inclusive() {
        assert!(slot("10:00", "22:00").within_operating_hours());
        assert!(slot("10:00", "11:00").within_operating_hours());
        assert!(!slot("09:59", "11:00").within_operating_hours());
        assert!(!slot("21:00", "22:01").within_operating_hours());
    }

    #[test]
    fn out_of_hours_error_names_the_window() {
        let err = slot("09:00", "11:00").check_operating_hours().unwrap_err();
        match err {
            DomainError::OutOfHours { opening, closing } => {
                assert_eq!(opening, "10:00");
                assert_eq!(closing, "22:00");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Domain errors

use thiserror::Error;

/// Domain-level error types.
///
/// Every variant is recoverable at the API boundary: handlers map them to
/// an HTTP status and a human-readable message, nothing here aborts the
/// process.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Time string that is neither 24-hour "HH:MM" nor 12-hour "HH:MM AM/PM"
    #[error("Invalid {field} '{value}': expected HH:MM or HH:MM AM/PM")]
    Format { field: &'static str, value: String },

    /// End time not strictly after start time
    #[error("End time must be after start time ({start} .. {end})")]
    InvalidRange { start: String, end: String },

    /// Slot falls outside the restaurant's operating hours
    #[error("Reservations must be between {opening} and {closing}")]
    OutOfHours { opening: String, closing: String },

    /// Party does not fit at the requested table
    #[error("Party size {requested} exceeds table capacity {limit}")]
    CapacityExceeded { requested: i32, limit: i32 },

    /// A confirmed reservation already overlaps the requested slot
    #[error("Table {table_id} is not available on {date} from {start} to {end}")]
    SlotUnavailable {
        table_id: i32,
        date: chrono::NaiveDate,
        start: String,
        end: String,
    },

    /// Unknown table or reservation identifier
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Unknown reservation template name
    #[error("Unknown reservation template: {0}")]
    InvalidTemplate(String),

    /// Incomplete or ill-typed input (e.g. a builder draft missing a field)
    #[error("Validation: {0}")]
    Validation(String),

    /// Storage-level failure; the prior persisted state is left intact
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// The request field the error is about, where one can be named.
    pub fn offending_field(&self) -> Option<&'static str> {
        match self {
            Self::Format { field, .. } => Some(field),
            Self::InvalidRange { .. } => Some("end_time"),
            Self::OutOfHours { .. } => Some("start_time"),
            Self::CapacityExceeded { .. } => Some("party_size"),
            Self::SlotUnavailable { .. } => Some("table_id"),
            Self::NotFound { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

pub mod error;
pub mod repositories;
pub mod reservation;
pub mod schedule;
pub mod table;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
pub use reservation::{
    Reservation, ReservationBuilder, ReservationDraft, ReservationKind, ReservationRepository,
    ReservationStatus,
};
pub use schedule::{TimeSlot, CLOSING_TIME, OPENING_TIME};
pub use table::{Table, TableRepository};

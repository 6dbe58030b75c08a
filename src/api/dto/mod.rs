//! API data transfer objects

pub mod common;
pub mod reservation;
pub mod table;

pub use common::{ApiResponse, EmptyData};
pub use reservation::{ReservationRequest, ReservationResponse, TemplateResponse};
pub use table::{AvailabilityResponse, SlotQuery, TableResponse};

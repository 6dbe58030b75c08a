//! Reservation aggregate
//!
//! Contains the Reservation entity, the builder/draft pair, canned
//! templates, and the repository interface.

pub mod model;
pub mod repository;
pub mod template;

pub use model::{
    Reservation, ReservationBuilder, ReservationDraft, ReservationKind, ReservationStatus,
};
pub use repository::ReservationRepository;
pub use template::{all_templates, template_by_name, template_for};

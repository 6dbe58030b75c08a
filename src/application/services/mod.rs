//! Application services

pub mod reservation;

pub use reservation::ReservationService;

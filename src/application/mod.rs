pub mod services;

pub use services::ReservationService;

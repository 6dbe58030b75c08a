//! Database entities module

pub mod reservation;
pub mod table;

pub use reservation::Entity as Reservation;
pub use table::Entity as Table;

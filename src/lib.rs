//! # Reserva
//!
//! Single-restaurant table reservation manager.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits — tables,
//!   reservations, time-slot overlap logic, templates
//! - **application**: Business logic — the reservation admission chain
//!   and availability queries
//! - **infrastructure**: External concerns (SQLite storage via SeaORM,
//!   in-memory storage for development)
//! - **api**: REST API with Swagger documentation
//!
//! Reservation admission is the only part with real design content:
//! given a table, a date, and a half-open [start, end) time interval,
//! decide whether the booking may be accepted without overlapping an
//! existing confirmed reservation on the same table. The check runs
//! once as an advisory read and again atomically inside the write.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router and core service
pub use api::create_api_router;
pub use application::ReservationService;

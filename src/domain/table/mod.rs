//! Table aggregate

pub mod model;
pub mod repository;

pub use model::Table;
pub use repository::TableRepository;

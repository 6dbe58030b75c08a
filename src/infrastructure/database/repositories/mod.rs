//! SeaORM repository implementations

pub mod repository_provider;
pub mod reservation_repository;
pub mod table_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
pub use reservation_repository::SeaOrmReservationRepository;
pub use table_repository::SeaOrmTableRepository;

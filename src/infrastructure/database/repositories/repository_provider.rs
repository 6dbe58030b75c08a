//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::table::TableRepository;

use super::reservation_repository::SeaOrmReservationRepository;
use super::table_repository::SeaOrmTableRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository
/// accessors.
pub struct SeaOrmRepositoryProvider {
    tables: SeaOrmTableRepository,
    reservations: SeaOrmReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            tables: SeaOrmTableRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn tables(&self) -> &dyn TableRepository {
        &self.tables
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

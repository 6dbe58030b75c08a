//! Repository traits for the domain layer

use super::reservation::ReservationRepository;
use super::table::TableRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let tables = repos.tables().find_all().await?;
///     let open = repos.reservations().has_conflict(1, date, slot, None).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn tables(&self) -> &dyn TableRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
}

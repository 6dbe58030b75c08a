//! Table repository interface

use async_trait::async_trait;

use super::model::Table;
use crate::domain::DomainResult;

#[async_trait]
pub trait TableRepository: Send + Sync {
    /// Insert a new table; the store assigns the ID (pass 0).
    async fn save(&self, table: Table) -> DomainResult<Table>;

    /// Find table by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Table>>;

    /// All tables ordered by table number
    async fn find_all(&self) -> DomainResult<Vec<Table>>;

    /// Number of tables in the store
    async fn count(&self) -> DomainResult<u64>;
}

//! SeaORM implementation of TableRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::table::{Table, TableRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::table;

pub struct SeaOrmTableRepository {
    db: DatabaseConnection,
}

impl SeaOrmTableRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: table::Model) -> Table {
    Table {
        id: m.id,
        number: m.number,
        capacity: m.capacity,
        location: m.location,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Persistence(format!("Database error: {}", e))
}

#[async_trait]
impl TableRepository for SeaOrmTableRepository {
    async fn save(&self, t: Table) -> DomainResult<Table> {
        debug!("Saving table #{}", t.number);

        let model = table::ActiveModel {
            id: NotSet,
            number: Set(t.number),
            capacity: Set(t.capacity),
            location: Set(t.location),
        };
        let stored = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(stored))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Table>> {
        let model = table::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Table>> {
        let models = table::Entity::find()
            .order_by_asc(table::Column::Number)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        table::Entity::find().count(&self.db).await.map_err(db_err)
    }
}

//! PostgreSQL adapter for MerchantRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};

use super::query::{alphabetical, name_like, windowed};
use crate::domain::entities::{Merchant, MerchantId};
use crate::domain::ports::MerchantRepository;
use crate::domain::query::{MerchantFilter, MerchantQuery, SortKey};
use crate::entity::merchants;
use crate::error::DomainError;

/// PostgreSQL implementation of MerchantRepository
pub struct PostgresMerchantRepository {
    db: DatabaseConnection,
}

impl PostgresMerchantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MerchantRepository for PostgresMerchantRepository {
    async fn find_by_id(&self, id: &MerchantId) -> Result<Option<Merchant>, DomainError> {
        let result = merchants::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn fetch(&self, query: &MerchantQuery) -> Result<Vec<Merchant>, DomainError> {
        let results = windowed(select(query), &query.window)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

fn select(query: &MerchantQuery) -> Select<merchants::Entity> {
    let select = merchants::Entity::find();

    let select = match &query.filter {
        MerchantFilter::All => select,
        MerchantFilter::NameFragment(fragment) => select.filter(name_like::<merchants::Entity>(
            merchants::Column::Name,
            fragment,
        )),
        MerchantFilter::Ids(ids) => {
            select.filter(merchants::Column::Id.is_in(ids.iter().map(|id| id.0)))
        }
    };

    match query.sort {
        SortKey::Id => select.order_by_asc(merchants::Column::Id),
        SortKey::Name => alphabetical(select, merchants::Column::Name)
            .order_by_asc(merchants::Column::Id),
    }
}

/// Convert SeaORM model to domain entity
impl From<merchants::Model> for Merchant {
    fn from(model: merchants::Model) -> Self {
        Merchant {
            id: MerchantId(model.id),
            name: model.name,
        }
    }
}

//! PostgreSQL adapter for ItemRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};

use super::query::{alphabetical, name_like, windowed};
use crate::domain::entities::{Item, ItemId, MerchantId};
use crate::domain::ports::ItemRepository;
use crate::domain::query::{ItemFilter, ItemQuery, SortKey};
use crate::entity::items;
use crate::error::DomainError;

/// PostgreSQL implementation of ItemRepository
pub struct PostgresItemRepository {
    db: DatabaseConnection,
}

impl PostgresItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let result = items::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn fetch(&self, query: &ItemQuery) -> Result<Vec<Item>, DomainError> {
        let results = windowed(select(query), &query.window)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

fn select(query: &ItemQuery) -> Select<items::Entity> {
    let mut select = items::Entity::find();

    match &query.filter {
        ItemFilter::All => {}
        ItemFilter::NameFragment(fragment) => {
            select = select.filter(name_like::<items::Entity>(items::Column::Name, fragment));
        }
        ItemFilter::UnitPrice(range) => {
            if let Some(min) = range.min() {
                select = select.filter(items::Column::UnitPrice.gte(min));
            }
            if let Some(max) = range.max() {
                select = select.filter(items::Column::UnitPrice.lte(max));
            }
        }
        ItemFilter::Merchant(merchant_id) => {
            select = select.filter(items::Column::MerchantId.eq(merchant_id.0));
        }
        ItemFilter::Ids(ids) => {
            select = select.filter(items::Column::Id.is_in(ids.iter().map(|id| id.0)));
        }
    }

    match query.sort {
        SortKey::Id => select.order_by_asc(items::Column::Id),
        SortKey::Name => alphabetical(select, items::Column::Name)
            .order_by_asc(items::Column::Id),
    }
}

/// Convert SeaORM model to domain entity
impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Item {
            id: ItemId(model.id),
            name: model.name,
            description: model.description,
            unit_price: model.unit_price,
            merchant_id: MerchantId(model.merchant_id),
        }
    }
}

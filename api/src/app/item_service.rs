//! Item service
//!
//! Item lookups, listings, single-item search, the owning merchant and the
//! invoices that sold nothing but a given item.

use std::sync::Arc;

use crate::domain::entities::{InvoiceId, Item, ItemId, Merchant};
use crate::domain::ports::{InvoiceRepository, ItemRepository, MerchantRepository};
use crate::domain::query::{ItemQuery, Page, SoleItemInvoices};
use crate::error::{AppError, DomainError};

use super::query_params::ItemSearch;

pub struct ItemService {
    items: Arc<dyn ItemRepository>,
    merchants: Arc<dyn MerchantRepository>,
    invoices: Arc<dyn InvoiceRepository>,
}

impl ItemService {
    pub fn new(
        items: Arc<dyn ItemRepository>,
        merchants: Arc<dyn MerchantRepository>,
        invoices: Arc<dyn InvoiceRepository>,
    ) -> Self {
        Self {
            items,
            merchants,
            invoices,
        }
    }

    pub async fn get_item(&self, id: &ItemId) -> Result<Item, AppError> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))
    }

    pub async fn list_items(&self, page: Page) -> Result<Vec<Item>, AppError> {
        tracing::debug!(
            page = page.number(),
            per_page = page.per_page(),
            "Listing items"
        );
        Ok(self.items.fetch(&ItemQuery::listing(page)).await?)
    }

    /// The alphabetically first match, or `None` when nothing matches
    pub async fn find_item(&self, search: ItemSearch) -> Result<Option<Item>, AppError> {
        tracing::debug!(?search, "Searching items");
        let query = match search {
            ItemSearch::NameFragment(fragment) => ItemQuery::find_one_by_name_fragment(fragment),
            ItemSearch::UnitPrice(range) => ItemQuery::find_one_by_unit_price(range),
        };
        Ok(self.items.fetch(&query).await?.into_iter().next())
    }

    pub async fn item_merchant(&self, id: &ItemId) -> Result<Merchant, AppError> {
        let item = self.get_item(id).await?;
        let merchant = self
            .merchants
            .find_by_id(&item.merchant_id)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "Item {} references missing merchant {}",
                    item.id, item.merchant_id
                ))
            })?;
        Ok(merchant)
    }

    /// Invoices whose only distinct item is this one, ascending by id
    pub async fn sole_item_invoices(&self, id: &ItemId) -> Result<Vec<InvoiceId>, AppError> {
        let item = self.get_item(id).await?;
        let query = SoleItemInvoices::invoices_only_one_item(item.id);
        Ok(self.invoices.sole_item_invoices(&query).await?)
    }
}

//! Merchant service
//!
//! Merchant lookups, listings, name search and the merchant's catalog.

use std::sync::Arc;

use crate::domain::entities::{Item, Merchant, MerchantId};
use crate::domain::ports::{ItemRepository, MerchantRepository};
use crate::domain::query::{ItemQuery, MerchantQuery, NameFragment, Page};
use crate::error::AppError;

pub struct MerchantService {
    merchants: Arc<dyn MerchantRepository>,
    items: Arc<dyn ItemRepository>,
}

impl MerchantService {
    pub fn new(merchants: Arc<dyn MerchantRepository>, items: Arc<dyn ItemRepository>) -> Self {
        Self { merchants, items }
    }

    pub async fn get_merchant(&self, id: &MerchantId) -> Result<Merchant, AppError> {
        self.merchants
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Merchant {} not found", id)))
    }

    pub async fn list_merchants(&self, page: Page) -> Result<Vec<Merchant>, AppError> {
        tracing::debug!(
            page = page.number(),
            per_page = page.per_page(),
            "Listing merchants"
        );
        Ok(self.merchants.fetch(&MerchantQuery::listing(page)).await?)
    }

    /// Every merchant whose name contains `fragment`, alphabetically
    pub async fn find_all_merchants(
        &self,
        fragment: NameFragment,
    ) -> Result<Vec<Merchant>, AppError> {
        tracing::debug!(name = fragment.as_str(), "Searching merchants");
        let query = MerchantQuery::find_all_by_name_fragment(fragment);
        Ok(self.merchants.fetch(&query).await?)
    }

    /// Items sold by a merchant; 404 when the merchant does not exist
    pub async fn merchant_items(&self, id: &MerchantId) -> Result<Vec<Item>, AppError> {
        let merchant = self.get_merchant(id).await?;
        Ok(self.items.fetch(&ItemQuery::for_merchant(merchant.id)).await?)
    }
}

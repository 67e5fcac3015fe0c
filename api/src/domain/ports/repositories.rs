//! Repository port traits
//!
//! These traits define the interface for data access.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//! Every method is a read; the store is owned elsewhere.

use async_trait::async_trait;

use crate::domain::entities::{
    Invoice, InvoiceId, Item, ItemId, Merchant, MerchantId, RevenueRow,
};
use crate::domain::query::{ItemQuery, MerchantQuery, RevenueQuery, SoleItemInvoices};
use crate::error::DomainError;

/// Repository for Merchant entities
#[async_trait]
pub trait MerchantRepository: Send + Sync {
    /// Find a merchant by ID
    async fn find_by_id(&self, id: &MerchantId) -> Result<Option<Merchant>, DomainError>;

    /// Run a merchant query, returning rows in query order
    async fn fetch(&self, query: &MerchantQuery) -> Result<Vec<Merchant>, DomainError>;
}

/// Repository for Item entities
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find an item by ID
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError>;

    /// Run an item query, returning rows in query order
    async fn fetch(&self, query: &ItemQuery) -> Result<Vec<Item>, DomainError>;
}

/// Repository for Invoice entities
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Load the given invoices (order unspecified, missing ids skipped)
    async fn find_by_ids(&self, ids: &[InvoiceId]) -> Result<Vec<Invoice>, DomainError>;

    /// Ids of invoices carrying only the queried item, ascending
    async fn sole_item_invoices(
        &self,
        query: &SoleItemInvoices,
    ) -> Result<Vec<InvoiceId>, DomainError>;
}

/// Aggregations over invoice line items
#[async_trait]
pub trait RevenueRepository: Send + Sync {
    /// Run a revenue aggregate, returning ranked rows
    async fn aggregate(&self, query: &RevenueQuery) -> Result<Vec<RevenueRow>, DomainError>;
}

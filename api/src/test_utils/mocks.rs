//! Mock implementations of port traits
//!
//! `InMemoryStore` holds the storefront tables in memory and interprets the
//! same query specifications the PostgreSQL adapters execute, so services and
//! the router can be tested without a database.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Invoice, InvoiceId, InvoiceItem, Item, ItemId, Merchant, MerchantId, RevenueRow, Transaction,
    TransactionResult,
};
use crate::domain::ports::{
    InvoiceRepository, ItemRepository, MerchantRepository, RevenueRepository,
};
use crate::domain::query::{ItemQuery, MerchantQuery, RevenueGroup, RevenueQuery, SoleItemInvoices};
use crate::error::DomainError;

// ============================================================================
// In-Memory Store
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryStore {
    merchants: Arc<RwLock<Vec<Merchant>>>,
    items: Arc<RwLock<Vec<Item>>>,
    invoices: Arc<RwLock<Vec<Invoice>>>,
    invoice_items: Arc<RwLock<Vec<InvoiceItem>>>,
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merchant(self, merchant: Merchant) -> Self {
        self.merchants.write().unwrap().push(merchant);
        self
    }

    pub fn with_merchants(self, merchants: impl IntoIterator<Item = Merchant>) -> Self {
        self.merchants.write().unwrap().extend(merchants);
        self
    }

    pub fn with_item(self, item: Item) -> Self {
        self.items.write().unwrap().push(item);
        self
    }

    pub fn with_invoice(self, invoice: Invoice) -> Self {
        self.invoices.write().unwrap().push(invoice);
        self
    }

    pub fn with_invoice_item(self, line: InvoiceItem) -> Self {
        self.invoice_items.write().unwrap().push(line);
        self
    }

    pub fn with_transaction(self, transaction: Transaction) -> Self {
        self.transactions.write().unwrap().push(transaction);
        self
    }
}

#[async_trait]
impl MerchantRepository for InMemoryStore {
    async fn find_by_id(&self, id: &MerchantId) -> Result<Option<Merchant>, DomainError> {
        let merchants = self.merchants.read().unwrap();
        Ok(merchants.iter().find(|m| m.id == *id).cloned())
    }

    async fn fetch(&self, query: &MerchantQuery) -> Result<Vec<Merchant>, DomainError> {
        let merchants = self.merchants.read().unwrap();
        let mut results: Vec<Merchant> = merchants
            .iter()
            .filter(|m| query.filter.matches(m))
            .cloned()
            .collect();
        results.sort_by(|a, b| query.compare(a, b));
        Ok(query.window.slice(results))
    }
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().unwrap();
        Ok(items.iter().find(|i| i.id == *id).cloned())
    }

    async fn fetch(&self, query: &ItemQuery) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().unwrap();
        let mut results: Vec<Item> = items
            .iter()
            .filter(|i| query.filter.matches(i))
            .cloned()
            .collect();
        results.sort_by(|a, b| query.compare(a, b));
        Ok(query.window.slice(results))
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryStore {
    async fn find_by_ids(&self, ids: &[InvoiceId]) -> Result<Vec<Invoice>, DomainError> {
        let invoices = self.invoices.read().unwrap();
        Ok(invoices
            .iter()
            .filter(|i| ids.contains(&i.id))
            .cloned()
            .collect())
    }

    async fn sole_item_invoices(
        &self,
        query: &SoleItemInvoices,
    ) -> Result<Vec<InvoiceId>, DomainError> {
        let lines = self.invoice_items.read().unwrap();
        let mut item_sets: BTreeMap<InvoiceId, BTreeSet<ItemId>> = BTreeMap::new();
        for line in lines.iter() {
            item_sets
                .entry(line.invoice_id)
                .or_default()
                .insert(line.item_id);
        }

        let only = BTreeSet::from([query.item_id]);
        Ok(item_sets
            .into_iter()
            .filter(|(_, items)| *items == only)
            .map(|(invoice_id, _)| invoice_id)
            .collect())
    }
}

#[async_trait]
impl RevenueRepository for InMemoryStore {
    async fn aggregate(&self, query: &RevenueQuery) -> Result<Vec<RevenueRow>, DomainError> {
        let invoices = self.invoices.read().unwrap();
        let items = self.items.read().unwrap();
        let lines = self.invoice_items.read().unwrap();
        let transactions = self.transactions.read().unwrap();

        let mut sums: HashMap<i64, Decimal> = HashMap::new();
        for line in lines.iter() {
            let Some(invoice) = invoices.iter().find(|i| i.id == line.invoice_id) else {
                continue;
            };
            if invoice.status != query.scope.invoice_status() {
                continue;
            }
            if query.scope.requires_successful_transaction()
                && !transactions.iter().any(|t| {
                    t.invoice_id == invoice.id && t.result == TransactionResult::Success
                })
            {
                continue;
            }

            let merchant_id = items
                .iter()
                .find(|i| i.id == line.item_id)
                .map(|i| i.merchant_id);
            if query.merchant.is_some() && merchant_id != query.merchant {
                continue;
            }

            let key = match query.group {
                RevenueGroup::Item => line.item_id.0,
                RevenueGroup::Invoice => invoice.id.0,
                RevenueGroup::Merchant => match merchant_id {
                    Some(merchant_id) => merchant_id.0,
                    None => continue,
                },
            };
            *sums.entry(key).or_default() += line.line_total();
        }

        let rows = sums
            .into_iter()
            .map(|(id, revenue)| RevenueRow { id, revenue })
            .collect();
        Ok(query.rank(rows))
    }
}

// ============================================================================
// Unavailable Store
// ============================================================================

/// Every call fails as if the database were down
#[derive(Default, Clone)]
pub struct UnavailableStore;

fn unavailable<T>() -> Result<T, DomainError> {
    Err(DomainError::Database("connection refused".to_string()))
}

#[async_trait]
impl MerchantRepository for UnavailableStore {
    async fn find_by_id(&self, _id: &MerchantId) -> Result<Option<Merchant>, DomainError> {
        unavailable()
    }

    async fn fetch(&self, _query: &MerchantQuery) -> Result<Vec<Merchant>, DomainError> {
        unavailable()
    }
}

#[async_trait]
impl ItemRepository for UnavailableStore {
    async fn find_by_id(&self, _id: &ItemId) -> Result<Option<Item>, DomainError> {
        unavailable()
    }

    async fn fetch(&self, _query: &ItemQuery) -> Result<Vec<Item>, DomainError> {
        unavailable()
    }
}

#[async_trait]
impl InvoiceRepository for UnavailableStore {
    async fn find_by_ids(&self, _ids: &[InvoiceId]) -> Result<Vec<Invoice>, DomainError> {
        unavailable()
    }

    async fn sole_item_invoices(
        &self,
        _query: &SoleItemInvoices,
    ) -> Result<Vec<InvoiceId>, DomainError> {
        unavailable()
    }
}

#[async_trait]
impl RevenueRepository for UnavailableStore {
    async fn aggregate(&self, _query: &RevenueQuery) -> Result<Vec<RevenueRow>, DomainError> {
        unavailable()
    }
}

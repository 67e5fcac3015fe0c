//! Revenue service
//!
//! Realized revenue per merchant and per item, and the potential revenue
//! sitting in packaged invoices. Aggregates come back as bare ids and sums;
//! this service joins them with the entities they describe.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{
    InvoiceId, ItemId, ItemRevenue, MerchantId, MerchantRevenue, RankedMerchant, RevenueRow,
    UnshippedInvoice,
};
use crate::domain::ports::{
    InvoiceRepository, ItemRepository, MerchantRepository, RevenueRepository,
};
use crate::domain::query::{ItemQuery, MerchantQuery, RevenueQuery};
use crate::error::AppError;

pub struct RevenueService {
    revenue: Arc<dyn RevenueRepository>,
    merchants: Arc<dyn MerchantRepository>,
    items: Arc<dyn ItemRepository>,
    invoices: Arc<dyn InvoiceRepository>,
}

impl RevenueService {
    pub fn new(
        revenue: Arc<dyn RevenueRepository>,
        merchants: Arc<dyn MerchantRepository>,
        items: Arc<dyn ItemRepository>,
        invoices: Arc<dyn InvoiceRepository>,
    ) -> Self {
        Self {
            revenue,
            merchants,
            items,
            invoices,
        }
    }

    /// Realized revenue of one merchant; zero when nothing has been paid for
    pub async fn merchant_revenue(&self, id: &MerchantId) -> Result<MerchantRevenue, AppError> {
        let merchant = self
            .merchants
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Merchant {} not found", id)))?;

        let rows = self
            .revenue
            .aggregate(&RevenueQuery::merchant_revenue(merchant.id))
            .await?;
        let revenue = rows.iter().map(|row| row.revenue).sum::<Decimal>();

        tracing::debug!(merchant_id = %merchant.id, %revenue, "Merchant revenue");
        Ok(MerchantRevenue {
            merchant_id: merchant.id,
            revenue,
        })
    }

    /// Merchants ranked by realized revenue
    pub async fn top_merchants(&self, quantity: u64) -> Result<Vec<RankedMerchant>, AppError> {
        let rows = self
            .revenue
            .aggregate(&RevenueQuery::top_merchants(quantity))
            .await?;
        let ids = rows.iter().map(|row| MerchantId(row.id)).collect();
        let mut merchants: HashMap<MerchantId, _> = self
            .merchants
            .fetch(&MerchantQuery::by_ids(ids))
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        Ok(in_rank_order(rows, |id| merchants.remove(&MerchantId(id)))
            .into_iter()
            .map(|(merchant, revenue)| RankedMerchant { merchant, revenue })
            .collect())
    }

    /// Items ranked by realized revenue
    pub async fn top_items(&self, quantity: u64) -> Result<Vec<ItemRevenue>, AppError> {
        let rows = self
            .revenue
            .aggregate(&RevenueQuery::top_revenue(quantity))
            .await?;
        let ids = rows.iter().map(|row| ItemId(row.id)).collect();
        let mut items: HashMap<ItemId, _> = self
            .items
            .fetch(&ItemQuery::by_ids(ids))
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        Ok(in_rank_order(rows, |id| items.remove(&ItemId(id)))
            .into_iter()
            .map(|(item, revenue)| ItemRevenue { item, revenue })
            .collect())
    }

    /// Packaged invoices ranked by the revenue they would realize
    pub async fn unshipped_potential_revenue(
        &self,
        quantity: u64,
    ) -> Result<Vec<UnshippedInvoice>, AppError> {
        let rows = self
            .revenue
            .aggregate(&RevenueQuery::unshipped_potential_revenue(quantity))
            .await?;
        let ids: Vec<InvoiceId> = rows.iter().map(|row| InvoiceId(row.id)).collect();
        let mut invoices: HashMap<InvoiceId, _> = self
            .invoices
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();

        Ok(in_rank_order(rows, |id| invoices.remove(&InvoiceId(id)))
            .into_iter()
            .map(|(invoice, potential_revenue)| UnshippedInvoice {
                invoice,
                potential_revenue,
            })
            .collect())
    }
}

/// Pair ranked rows with their entities, keeping the ranking
///
/// A row whose entity vanished between the aggregate and the lookup is skipped.
fn in_rank_order<T>(
    rows: Vec<RevenueRow>,
    mut take: impl FnMut(i64) -> Option<T>,
) -> Vec<(T, Decimal)> {
    rows.into_iter()
        .filter_map(|row| match take(row.id) {
            Some(entity) => Some((entity, row.revenue)),
            None => {
                tracing::warn!(id = row.id, "Revenue row without a matching record");
                None
            }
        })
        .collect()
}

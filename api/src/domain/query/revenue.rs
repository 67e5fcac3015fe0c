//! Revenue aggregation
//!
//! Joins line items to invoices (and items when grouping or filtering by
//! merchant), keeps the invoices in scope, sums `quantity * unit_price` per
//! group and ranks the groups.

use std::cmp::Ordering;

use crate::domain::entities::{InvoiceStatus, ItemId, MerchantId, RevenueRow};

/// What each aggregate row is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueGroup {
    Item,
    Merchant,
    Invoice,
}

/// Which invoices contribute to the sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueScope {
    /// Shipped invoices with at least one successful transaction
    Realized,
    /// Packaged invoices, whatever their transactions say
    Potential,
}

impl RevenueScope {
    pub fn invoice_status(&self) -> InvoiceStatus {
        match self {
            RevenueScope::Realized => InvoiceStatus::Shipped,
            RevenueScope::Potential => InvoiceStatus::Packaged,
        }
    }

    pub fn requires_successful_transaction(&self) -> bool {
        matches!(self, RevenueScope::Realized)
    }
}

/// An aggregate over invoice line items
///
/// Rows are ordered by revenue descending, then by group id ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueQuery {
    pub group: RevenueGroup,
    pub scope: RevenueScope,
    /// Restrict the sum to one merchant's items
    pub merchant: Option<MerchantId>,
    pub limit: Option<u64>,
}

impl RevenueQuery {
    /// Items ranked by realized revenue
    pub fn top_revenue(quantity: u64) -> Self {
        Self {
            group: RevenueGroup::Item,
            scope: RevenueScope::Realized,
            merchant: None,
            limit: Some(quantity),
        }
    }

    /// Merchants ranked by realized revenue
    pub fn top_merchants(quantity: u64) -> Self {
        Self {
            group: RevenueGroup::Merchant,
            scope: RevenueScope::Realized,
            merchant: None,
            limit: Some(quantity),
        }
    }

    /// Realized revenue of a single merchant
    pub fn merchant_revenue(merchant_id: MerchantId) -> Self {
        Self {
            group: RevenueGroup::Merchant,
            scope: RevenueScope::Realized,
            merchant: Some(merchant_id),
            limit: None,
        }
    }

    /// Packaged invoices ranked by the revenue they would realize
    pub fn unshipped_potential_revenue(quantity: u64) -> Self {
        Self {
            group: RevenueGroup::Invoice,
            scope: RevenueScope::Potential,
            merchant: None,
            limit: Some(quantity),
        }
    }

    /// Order and truncate aggregate rows the way the store does
    pub fn rank(&self, mut rows: Vec<RevenueRow>) -> Vec<RevenueRow> {
        rows.sort_by(revenue_ranking);
        if let Some(limit) = self.limit {
            rows.truncate(limit as usize);
        }
        rows
    }
}

fn revenue_ranking(a: &RevenueRow, b: &RevenueRow) -> Ordering {
    b.revenue.cmp(&a.revenue).then(a.id.cmp(&b.id))
}

/// Invoices whose distinct item set is exactly `{item_id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoleItemInvoices {
    pub item_id: ItemId,
}

impl SoleItemInvoices {
    pub fn invoices_only_one_item(item_id: ItemId) -> Self {
        Self { item_id }
    }
}

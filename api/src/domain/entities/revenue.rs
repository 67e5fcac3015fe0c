//! Revenue aggregates
//!
//! Derived values computed from invoice line items. Never persisted.

use rust_decimal::Decimal;

use super::invoice::Invoice;
use super::item::Item;
use super::merchant::{Merchant, MerchantId};

/// One aggregate row: the grouping key and the summed `quantity * unit_price`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueRow {
    pub id: i64,
    pub revenue: Decimal,
}

/// Realized revenue for a single merchant
#[derive(Debug, Clone, PartialEq)]
pub struct MerchantRevenue {
    pub merchant_id: MerchantId,
    pub revenue: Decimal,
}

/// A merchant ranked by realized revenue
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMerchant {
    pub merchant: Merchant,
    pub revenue: Decimal,
}

/// An item ranked by realized revenue
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRevenue {
    pub item: Item,
    pub revenue: Decimal,
}

/// A packaged invoice with the revenue it would realize once shipped
#[derive(Debug, Clone, PartialEq)]
pub struct UnshippedInvoice {
    pub invoice: Invoice,
    pub potential_revenue: Decimal,
}

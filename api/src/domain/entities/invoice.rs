//! Invoice domain entity
//!
//! An order placed by a customer with a merchant, plus the line items and
//! payment transactions recorded against it.

use rust_decimal::Decimal;

use super::item::ItemId;
use super::merchant::MerchantId;

/// Unique identifier for an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InvoiceId(pub i64);

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fulfilment state of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    /// Packed and waiting to ship
    Packaged,
    Shipped,
    Returned,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Packaged => write!(f, "packaged"),
            InvoiceStatus::Shipped => write!(f, "shipped"),
            InvoiceStatus::Returned => write!(f, "returned"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "packaged" => Ok(InvoiceStatus::Packaged),
            "shipped" => Ok(InvoiceStatus::Shipped),
            "returned" => Ok(InvoiceStatus::Returned),
            _ => Err(format!("Unknown invoice status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: i64,
    pub merchant_id: MerchantId,
    pub status: InvoiceStatus,
}

/// One item's quantity and sale-time price on an invoice
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceItem {
    pub id: i64,
    pub invoice_id: InvoiceId,
    pub item_id: ItemId,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl InvoiceItem {
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Outcome of a payment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionResult {
    Success,
    Failed,
}

impl std::fmt::Display for TransactionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionResult::Success => write!(f, "success"),
            TransactionResult::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for TransactionResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(TransactionResult::Success),
            "failed" | "failure" => Ok(TransactionResult::Failed),
            _ => Err(format!("Unknown transaction result: {}", s)),
        }
    }
}

/// A payment attempt against an invoice
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub invoice_id: InvoiceId,
    pub result: TransactionResult,
}

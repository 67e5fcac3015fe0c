//! Domain entities
//!
//! Read-only views over the storefront schema.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod invoice;
pub mod item;
pub mod merchant;
pub mod revenue;

pub use invoice::{Invoice, InvoiceId, InvoiceItem, InvoiceStatus, Transaction, TransactionResult};
pub use item::{Item, ItemId};
pub use merchant::{Merchant, MerchantId};
pub use revenue::{ItemRevenue, MerchantRevenue, RankedMerchant, RevenueRow, UnshippedInvoice};

//! Query specifications
//!
//! Typed descriptions of every read the API performs. Services build these
//! values; repositories execute them. Each type has exactly one execution
//! path per adapter, so the PostgreSQL adapter and the in-memory test store
//! interpret the same semantics.

pub mod catalog;
pub mod page;
pub mod price;
pub mod revenue;

pub use catalog::{ItemFilter, ItemQuery, MerchantFilter, MerchantQuery, NameFragment, SortKey};
pub use page::{Page, Window, DEFAULT_PER_PAGE};
pub use price::PriceRange;
pub use revenue::{RevenueGroup, RevenueQuery, SoleItemInvoices};

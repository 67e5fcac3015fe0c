//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod invoice_repo;
pub mod item_repo;
pub mod merchant_repo;
mod query;
pub mod revenue_repo;


pub use invoice_repo::PostgresInvoiceRepository;
pub use item_repo::PostgresItemRepository;
pub use merchant_repo::PostgresMerchantRepository;
pub use revenue_repo::PostgresRevenueRepository;

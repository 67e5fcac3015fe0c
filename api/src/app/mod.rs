//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, query specifications and ports.

pub mod item_service;
pub mod merchant_service;
pub mod query_params;
pub mod revenue_service;

pub use item_service::ItemService;
pub use merchant_service::MerchantService;
pub use query_params::{PageParams, QuantityParams, SearchParams};
pub use revenue_service::RevenueService;

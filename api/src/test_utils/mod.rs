//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - The in-memory store has to interpret query specifications, not just
//!   replay canned answers
//! - Manual mocks are more explicit and easier to debug
//!
//! Services hold their ports as trait objects, so the same store also backs
//! the full router in the axum-test scenarios.

pub mod fixtures;
pub mod mocks;

use std::sync::Arc;

pub use fixtures::*;
pub use mocks::*;

use crate::app::{ItemService, MerchantService, RevenueService};
use crate::domain::ports::{
    InvoiceRepository, ItemRepository, MerchantRepository, RevenueRepository,
};
use crate::AppState;

/// Wire every service to one store
pub fn test_state<S>(store: S) -> AppState
where
    S: MerchantRepository
        + ItemRepository
        + InvoiceRepository
        + RevenueRepository
        + 'static,
{
    let store = Arc::new(store);
    AppState {
        merchant_service: Arc::new(MerchantService::new(store.clone(), store.clone())),
        item_service: Arc::new(ItemService::new(
            store.clone(),
            store.clone(),
            store.clone(),
        )),
        revenue_service: Arc::new(RevenueService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )),
    }
}

//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod items;
pub mod merchants;
pub mod revenue;

use std::str::FromStr;

use axum::http::Uri;

use crate::error::AppError;

pub use items::{find_item, get_item, item_merchant, list_items, sole_item_invoices};
pub use merchants::{find_all_merchants, get_merchant, list_merchants, merchant_items};
pub use revenue::{merchant_revenue, top_items, top_merchants, unshipped_potential_revenue};

/// Parse a path id; anything that is not a valid id cannot name a record, so it is a 404
fn parse_id<T: FromStr>(raw: &str, kind: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("{} {} not found", kind, raw)))
}

/// Fallback for unknown routes
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

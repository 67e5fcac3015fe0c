//! Query parameter validation
//!
//! Turns raw query strings into typed searches before any query runs.
//! Every field deserializes as an optional string so extraction itself never
//! rejects a request; the conversions below decide what is valid.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::query::{NameFragment, Page, PriceRange, DEFAULT_PER_PAGE};
use crate::error::QueryError;

/// Rows returned by revenue reports when no quantity is given
pub const DEFAULT_QUANTITY: u64 = 10;

/// Raw `name` / `min_price` / `max_price` parameters
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

/// A validated single-item search
#[derive(Debug, Clone, PartialEq)]
pub enum ItemSearch {
    NameFragment(NameFragment),
    UnitPrice(PriceRange),
}

impl SearchParams {
    /// Validate an item search: either a name fragment or a price range, never both
    pub fn into_item_search(self) -> Result<ItemSearch, QueryError> {
        let name = present(&self.name);
        let min = present(&self.min_price);
        let max = present(&self.max_price);

        match (name, min.is_some() || max.is_some()) {
            (Some(_), true) => Err(QueryError::ConflictingParameters),
            (Some(name), false) => Ok(ItemSearch::NameFragment(fragment(name)?)),
            (None, true) => {
                let min = min.map(|raw| parse_price("min_price", raw)).transpose()?;
                let max = max.map(|raw| parse_price("max_price", raw)).transpose()?;
                Ok(ItemSearch::UnitPrice(PriceRange::new(min, max)?))
            }
            (None, false) => Err(QueryError::MissingParameters("name, min_price, max_price")),
        }
    }

    /// Validate a merchant search; merchants only search by name
    pub fn into_merchant_search(self) -> Result<NameFragment, QueryError> {
        let name = present(&self.name);
        let price_param = if present(&self.min_price).is_some() {
            Some("min_price")
        } else if present(&self.max_price).is_some() {
            Some("max_price")
        } else {
            None
        };

        match (name, price_param) {
            (Some(_), Some(_)) => Err(QueryError::ConflictingParameters),
            (Some(name), None) => fragment(name),
            (None, Some(param)) => Err(QueryError::UnsupportedParameter(param)),
            (None, None) => Err(QueryError::MissingParameters("name")),
        }
    }
}

/// Raw `page` / `per_page` parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl PageParams {
    /// Never fails: anything unusable falls back to page 1 of 20
    pub fn page(&self) -> Page {
        Page::new(
            positive_or(&self.page, 1),
            positive_or(&self.per_page, DEFAULT_PER_PAGE),
        )
    }
}

/// Raw `quantity` parameter for revenue reports
#[derive(Debug, Default, Deserialize)]
pub struct QuantityParams {
    pub quantity: Option<String>,
}

impl QuantityParams {
    /// Missing or unparsable is 10, negative is 0
    pub fn quantity(&self) -> u64 {
        match present(&self.quantity).map(|raw| raw.parse::<i64>()) {
            Some(Ok(n)) => n.max(0) as u64,
            _ => DEFAULT_QUANTITY,
        }
    }
}

/// Blank values count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn fragment(name: &str) -> Result<NameFragment, QueryError> {
    NameFragment::new(name).ok_or(QueryError::MissingParameters("name"))
}

fn parse_price(param: &'static str, raw: &str) -> Result<Decimal, QueryError> {
    raw.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| QueryError::InvalidNumber {
            param,
            value: raw.to_string(),
        })
}

fn positive_or(value: &Option<String>, default: u64) -> u64 {
    match present(value).map(|raw| raw.parse::<i64>()) {
        Some(Ok(n)) if n > 0 => n as u64,
        _ => default,
    }
}

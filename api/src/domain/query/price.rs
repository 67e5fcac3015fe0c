//! Unit price ranges

use rust_decimal::Decimal;

use crate::error::QueryError;

/// Inclusive price range where either side may be open
///
/// A missing bound means "unbounded" on that side; there is no sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceRange {
    min: Option<Decimal>,
    max: Option<Decimal>,
}

impl PriceRange {
    /// Validate and build a range. Bounds must be non-negative and `min <= max`.
    pub fn new(min: Option<Decimal>, max: Option<Decimal>) -> Result<Self, QueryError> {
        if min.is_some_and(|m| m < Decimal::ZERO) {
            return Err(QueryError::NegativePrice("min_price"));
        }
        if max.is_some_and(|m| m < Decimal::ZERO) {
            return Err(QueryError::NegativePrice("max_price"));
        }
        if let (Some(min), Some(max)) = (min, max) {
            if max < min {
                return Err(QueryError::InvertedPriceRange { min, max });
            }
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> Option<Decimal> {
        self.min
    }

    pub fn max(&self) -> Option<Decimal> {
        self.max
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

//! Item domain entity
//!
//! A product listed by a merchant at a unit price.

use rust_decimal::Decimal;

use super::merchant::MerchantId;

/// Unique identifier for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ItemId)
            .map_err(|_| format!("Invalid item id: {}", s))
    }
}

/// A product sold by a merchant
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
    pub merchant_id: MerchantId,
}

impl Item {
    /// Case-insensitive substring match against the item name
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

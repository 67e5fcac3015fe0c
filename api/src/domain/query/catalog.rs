//! Merchant and item lookups
//!
//! Filter + order + window specifications for the catalog tables.

use std::cmp::Ordering;

use crate::domain::entities::{Item, ItemId, Merchant, MerchantId};

use super::page::{Page, Window};
use super::price::PriceRange;

/// A non-blank search term matched case-insensitively as a substring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFragment(String);

impl NameFragment {
    /// Returns `None` for empty or whitespace-only input
    pub fn new(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// Lowercased `%fragment%` LIKE pattern; `\`, `%` and `_` in the term are escaped with `\`
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.to_lowercase().chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// Result ordering for catalog queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending id
    Id,
    /// Ascending name ignoring ASCII case, then the exact bytes, then ascending id
    Name,
}

impl SortKey {
    fn compare(&self, a: (&str, i64), b: (&str, i64)) -> Ordering {
        match self {
            SortKey::Id => a.1.cmp(&b.1),
            SortKey::Name => a
                .0
                .to_ascii_lowercase()
                .cmp(&b.0.to_ascii_lowercase())
                .then_with(|| a.0.cmp(b.0))
                .then(a.1.cmp(&b.1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemFilter {
    All,
    NameFragment(NameFragment),
    UnitPrice(PriceRange),
    Merchant(MerchantId),
    Ids(Vec<ItemId>),
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::NameFragment(fragment) => item.name_contains(fragment.as_str()),
            ItemFilter::UnitPrice(range) => range.contains(item.unit_price),
            ItemFilter::Merchant(merchant_id) => item.merchant_id == *merchant_id,
            ItemFilter::Ids(ids) => ids.contains(&item.id),
        }
    }
}

/// A read against the items table
#[derive(Debug, Clone, PartialEq)]
pub struct ItemQuery {
    pub filter: ItemFilter,
    pub sort: SortKey,
    pub window: Window,
}

impl ItemQuery {
    /// Alphabetically first item whose name contains `fragment`
    pub fn find_one_by_name_fragment(fragment: NameFragment) -> Self {
        Self {
            filter: ItemFilter::NameFragment(fragment),
            sort: SortKey::Name,
            window: Window::first(),
        }
    }

    /// Alphabetically first item priced inside `range`
    pub fn find_one_by_unit_price(range: PriceRange) -> Self {
        Self {
            filter: ItemFilter::UnitPrice(range),
            sort: SortKey::Name,
            window: Window::first(),
        }
    }

    pub fn listing(page: Page) -> Self {
        Self {
            filter: ItemFilter::All,
            sort: SortKey::Id,
            window: page.into(),
        }
    }

    pub fn for_merchant(merchant_id: MerchantId) -> Self {
        Self {
            filter: ItemFilter::Merchant(merchant_id),
            sort: SortKey::Id,
            window: Window::all(),
        }
    }

    pub fn by_ids(ids: Vec<ItemId>) -> Self {
        Self {
            filter: ItemFilter::Ids(ids),
            sort: SortKey::Id,
            window: Window::all(),
        }
    }

    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        self.sort
            .compare((a.name.as_str(), a.id.0), (b.name.as_str(), b.id.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MerchantFilter {
    All,
    NameFragment(NameFragment),
    Ids(Vec<MerchantId>),
}

impl MerchantFilter {
    pub fn matches(&self, merchant: &Merchant) -> bool {
        match self {
            MerchantFilter::All => true,
            MerchantFilter::NameFragment(fragment) => fragment.matches(&merchant.name),
            MerchantFilter::Ids(ids) => ids.contains(&merchant.id),
        }
    }
}

/// A read against the merchants table
#[derive(Debug, Clone, PartialEq)]
pub struct MerchantQuery {
    pub filter: MerchantFilter,
    pub sort: SortKey,
    pub window: Window,
}

impl MerchantQuery {
    pub fn listing(page: Page) -> Self {
        Self {
            filter: MerchantFilter::All,
            sort: SortKey::Id,
            window: page.into(),
        }
    }

    /// Every merchant whose name contains `fragment`, alphabetically
    pub fn find_all_by_name_fragment(fragment: NameFragment) -> Self {
        Self {
            filter: MerchantFilter::NameFragment(fragment),
            sort: SortKey::Name,
            window: Window::all(),
        }
    }

    pub fn by_ids(ids: Vec<MerchantId>) -> Self {
        Self {
            filter: MerchantFilter::Ids(ids),
            sort: SortKey::Id,
            window: Window::all(),
        }
    }

    pub fn compare(&self, a: &Merchant, b: &Merchant) -> Ordering {
        self.sort
            .compare((a.name.as_str(), a.id.0), (b.name.as_str(), b.id.0))
    }
}

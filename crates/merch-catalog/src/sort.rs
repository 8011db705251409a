use std::cmp::Ordering;

use merch_core::Product;
use serde::{Deserialize, Serialize};

/// Catalog ordering selected in the sort dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Lexicographic ascending by product name.
    #[default]
    Name,
    /// Price ascending.
    PriceLow,
    /// Price descending.
    PriceHigh,
    /// Rating descending.
    Rating,
}

impl SortKey {
    /// Parse a dropdown value into a `SortKey`.
    ///
    /// Unrecognized values fall back to name order.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            _ => SortKey::Name,
        }
    }

    /// Compare two products under this key.
    ///
    /// Equal products must keep their catalog order, so callers sort
    /// with a stable sort.
    #[must_use]
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::PriceLow => write!(f, "price-low"),
            SortKey::PriceHigh => write!(f, "price-high"),
            SortKey::Rating => write!(f, "rating"),
        }
    }
}

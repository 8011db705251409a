use std::collections::BTreeSet;

use merch_core::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds for the catalog filter.
///
/// The range is not validated: callers own well-formedness, and a range
/// with `min > max` deterministically matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    #[must_use]
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    /// The storefront's stock slider band.
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(100u32),
        }
    }
}

/// Active constraints narrowing the catalog view.
///
/// An empty set places no restriction on its dimension. A product is
/// visible iff every dimension admits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub categories: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub price_range: PriceRange,
}

impl FilterConfig {
    /// The visibility predicate: category membership, size-set
    /// intersection, color membership, and inclusive price bounds.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let size_ok =
            self.sizes.is_empty() || product.sizes.iter().any(|s| self.sizes.contains(s));
        let color_ok = self.colors.is_empty() || self.colors.contains(&product.color);

        category_ok && size_ok && color_ok && self.price_range.contains(product.price)
    }

    /// Checkbox semantics: selecting an active value deselects it.
    pub fn toggle_category(&mut self, value: &str) {
        Self::toggle(&mut self.categories, value);
    }

    pub fn toggle_size(&mut self, value: &str) {
        Self::toggle(&mut self.sizes, value);
    }

    pub fn toggle_color(&mut self, value: &str) {
        Self::toggle(&mut self.colors, value);
    }

    pub fn set_price_range(&mut self, min: Decimal, max: Decimal) {
        self.price_range = PriceRange::new(min, max);
    }

    /// Reset every dimension, restoring the default price band.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn toggle(set: &mut BTreeSet<String>, value: &str) {
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }
}

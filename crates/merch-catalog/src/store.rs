use merch_core::{CatalogFile, Product};
use rust_decimal::Decimal;

use crate::{visible_products, FilterConfig, SortKey};

/// The session's product catalog: an owned, in-memory list seeded once
/// at session start.
///
/// The store is handed to the view layer by reference; it is never a
/// process-wide singleton.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Seed from the compiled-in mock catalog.
    #[must_use]
    pub fn with_default_seed() -> Self {
        Self::from_products(merch_core::default_catalog())
    }

    /// Seed from a loaded (already validated) catalog file.
    #[must_use]
    pub fn from_file(file: CatalogFile) -> Self {
        Self::from_products(file.products)
    }

    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        tracing::debug!(products = products.len(), "catalog store seeded");
        Self { products }
    }

    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products flagged for the home-page featured row, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// The catalog's actual price extent, `None` when empty.
    ///
    /// The default filter band stays the stock `[0, 100]` slider; this
    /// is for embedders that want slider bounds driven by the data.
    #[must_use]
    pub fn price_band(&self) -> Option<(Decimal, Decimal)> {
        let min = self.products.iter().map(|p| p.price).min()?;
        let max = self.products.iter().map(|p| p.price).max()?;
        Some((min, max))
    }

    /// The filtered, ordered catalog view.
    #[must_use]
    pub fn visible(&self, filter: &FilterConfig, sort: SortKey) -> Vec<&Product> {
        visible_products(&self.products, filter, sort)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::with_default_seed()
    }
}

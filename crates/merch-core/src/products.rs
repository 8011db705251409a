use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable product in the storefront catalog.
///
/// Products are seeded once at session start and never mutated; every
/// derived view (filtering, sorting, cart snapshots) is recomputed from
/// the seeded list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique integer identifier within the catalog.
    pub id: u32,
    pub name: String,
    /// Display category, e.g. `"Apparel"` or `"Accessories"`.
    pub category: String,
    pub color: String,
    /// Unit price in the store currency. Non-negative.
    pub price: Decimal,
    /// Average review rating in `[0, 5]`.
    pub rating: f64,
    pub review_count: u32,
    /// Size labels this product is offered in, e.g. `["S", "M", "L"]`
    /// or `["One Size"]`. Order is preserved for display.
    pub sizes: Vec<String>,
    pub image_url: String,
    /// Whether the product is surfaced on the home-page featured row.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Returns `true` if the product is offered in the given size label.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Number of filled stars in the five-star review row.
    ///
    /// The rating is validated into `[0, 5]` at catalog load time; the
    /// clamp here only guards hand-built values.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stars(&self) -> u32 {
        self.rating.clamp(0.0, 5.0) as u32
    }
}

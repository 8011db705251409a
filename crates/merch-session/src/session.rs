use chrono::{DateTime, Utc};
use merch_cart::{Cart, CartEvent};
use merch_catalog::{CatalogStore, FilterConfig, SortKey};
use merch_core::Product;
use rust_decimal::Decimal;
use uuid::Uuid;

/// One browsing session's state: the active filter config, sort key,
/// and cart.
///
/// The catalog is injected by reference into every operation that needs
/// it — the session owns its own state and nothing global. All state
/// here lives and dies with the session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    filter: FilterConfig,
    sort: SortKey,
    cart: Cart,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            filter: FilterConfig::default(),
            sort: SortKey::default(),
            cart: Cart::new(),
        };
        tracing::debug!(session_id = %session.id, "session started");
        session
    }

    #[must_use]
    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // ------------------------------------------------------------------
    // Catalog view
    // ------------------------------------------------------------------

    pub fn toggle_category(&mut self, value: &str) {
        self.filter.toggle_category(value);
    }

    pub fn toggle_size(&mut self, value: &str) {
        self.filter.toggle_size(value);
    }

    pub fn toggle_color(&mut self, value: &str) {
        self.filter.toggle_color(value);
    }

    pub fn set_price_range(&mut self, min: Decimal, max: Decimal) {
        self.filter.set_price_range(min, max);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// The products currently visible under this session's filter and
    /// sort, recomputed in full from the injected catalog.
    #[must_use]
    pub fn visible<'a>(&self, catalog: &'a CatalogStore) -> Vec<&'a Product> {
        catalog.visible(&self.filter, self.sort)
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Add a catalog product to the cart by id.
    ///
    /// An unknown id is a no-op, matching the cart's degradation policy.
    pub fn add_to_cart(
        &mut self,
        catalog: &CatalogStore,
        product_id: u32,
        quantity: u32,
    ) -> Option<CartEvent> {
        let product = catalog.get(product_id)?;
        self.cart.add(product, quantity)
    }

    pub fn update_cart_quantity(&mut self, product_id: u32, quantity: u32) -> Option<CartEvent> {
        self.cart.update_quantity(product_id, quantity)
    }

    pub fn remove_from_cart(&mut self, product_id: u32) -> Option<CartEvent> {
        self.cart.remove(product_id)
    }

    /// The header badge count (total quantity, not line count).
    #[must_use]
    pub fn cart_badge(&self) -> u64 {
        self.cart.item_count()
    }

    /// The drawer's display total, rounded to 2 decimal places.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.display_total()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::Utc;
use merch_core::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CartEvent;

/// One product's accumulated quantity in the cart.
///
/// Name, price, and image are snapshotted from the product at add time,
/// not read back through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
    /// Strictly positive; a line stepped to zero is removed, never stored.
    pub quantity: u32,
}

/// The session cart: an ordered line sequence, unique by product id.
///
/// Every operation is a total, synchronous transformation — out-of-range
/// or missing-id inputs degrade to no-ops rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not the badge count; see [`Cart::item_count`]).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Add `quantity` of a product.
    ///
    /// Accumulates onto an existing line, or appends a new line at the
    /// end so insertion order is preserved. Adding zero is a no-op.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Option<CartEvent> {
        if quantity == 0 {
            return None;
        }

        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                price: product.price,
                image_url: product.image_url.clone(),
                quantity,
            }),
        }

        tracing::debug!(product_id = product.id, quantity, "cart add");
        Some(CartEvent::ItemAdded {
            product_id: product.id,
            name: product.name.clone(),
            quantity,
            occurred_at: Utc::now(),
        })
    }

    /// Set a line's quantity directly (not additive).
    ///
    /// A quantity of zero removes the line; an unknown id is a no-op.
    pub fn update_quantity(&mut self, product_id: u32, new_quantity: u32) -> Option<CartEvent> {
        if new_quantity == 0 {
            return self.remove(product_id);
        }

        let line = self.lines.iter_mut().find(|l| l.product_id == product_id)?;
        line.quantity = new_quantity;
        tracing::debug!(product_id, new_quantity, "cart quantity set");
        Some(CartEvent::QuantityUpdated {
            product_id,
            quantity: new_quantity,
            occurred_at: Utc::now(),
        })
    }

    /// Remove a line if present; no-op otherwise.
    pub fn remove(&mut self, product_id: u32) -> Option<CartEvent> {
        let index = self.lines.iter().position(|l| l.product_id == product_id)?;
        let line = self.lines.remove(index);
        tracing::debug!(product_id, "cart line removed");
        Some(CartEvent::ItemRemoved {
            product_id,
            name: line.name,
            occurred_at: Utc::now(),
        })
    }

    /// Sum of all line quantities — the header badge count.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Full-precision Σ price × quantity.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.price * Decimal::from(l.quantity))
            .sum()
    }

    /// The total rounded to 2 decimal places, for display only.
    #[must_use]
    pub fn display_total(&self) -> Decimal {
        self.total().round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: u32, name: &str, price: Decimal) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: "Apparel".to_string(),
            color: "Black".to_string(),
            price,
            rating: 4.8,
            review_count: 100,
            sizes: vec!["M".to_string()],
            image_url: format!("https://example.com/{id}.jpg"),
            featured: false,
        }
    }

    fn tee() -> Product {
        make_product(4, "Classic Logo Tee", Decimal::from(35u32))
    }

    fn hoodie() -> Product {
        make_product(6, "Minimalist Hoodie", Decimal::from(75u32))
    }

    #[test]
    fn add_same_product_accumulates_one_line() {
        let mut cart = Cart::new();
        cart.add(&tee(), 1);
        cart.add(&tee(), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&hoodie(), 1);
        cart.add(&tee(), 1);
        cart.add(&hoodie(), 1);

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![6, 4]);
    }

    #[test]
    fn add_snapshots_product_fields() {
        let mut cart = Cart::new();
        cart.add(&tee(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.name, "Classic Logo Tee");
        assert_eq!(line.price, Decimal::from(35u32));
        assert_eq!(line.image_url, "https://example.com/4.jpg");
    }

    #[test]
    fn add_zero_is_noop() {
        let mut cart = Cart::new();
        assert!(cart.add(&tee(), 0).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn add_returns_item_added_event() {
        let mut cart = Cart::new();
        let event = cart.add(&tee(), 2).expect("expected an event");
        assert!(matches!(
            event,
            CartEvent::ItemAdded { product_id: 4, quantity: 2, .. }
        ));
    }

    #[test]
    fn update_quantity_sets_directly_not_additively() {
        let mut cart = Cart::new();
        cart.add(&tee(), 3);
        let event = cart.update_quantity(4, 5).expect("expected an event");
        assert_eq!(cart.lines()[0].quantity, 5);
        assert!(matches!(
            event,
            CartEvent::QuantityUpdated { product_id: 4, quantity: 5, .. }
        ));
    }

    #[test]
    fn update_quantity_to_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(&tee(), 2);
        cart.add(&hoodie(), 1);

        let event = cart.update_quantity(4, 0).expect("expected an event");
        assert!(matches!(event, CartEvent::ItemRemoved { product_id: 4, .. }));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product_id, 6);
    }

    #[test]
    fn update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&tee(), 1);
        assert!(cart.update_quantity(999, 5).is_none());
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn remove_deletes_the_line() {
        let mut cart = Cart::new();
        cart.add(&tee(), 2);
        let event = cart.remove(4).expect("expected an event");
        assert!(matches!(
            event,
            CartEvent::ItemRemoved { product_id: 4, .. }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        assert!(cart.remove(4).is_none());
    }

    #[test]
    fn item_count_sums_quantities_not_lines() {
        let mut cart = Cart::new();
        cart.add(&tee(), 2);
        cart.add(&hoodie(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn total_is_price_times_quantity_across_lines() {
        let mut cart = Cart::new();
        cart.add(&tee(), 2);
        cart.add(&hoodie(), 1);
        assert_eq!(cart.total(), Decimal::from(145u32));
        assert_eq!(cart.display_total(), Decimal::new(14500, 2));
    }

    #[test]
    fn display_total_rounds_to_two_decimal_places() {
        let mut cart = Cart::new();
        let odd = make_product(1, "Fabric Swatch", Decimal::new(3333, 3)); // 3.333
        cart.add(&odd, 3);
        assert_eq!(cart.total(), Decimal::new(9999, 3)); // 9.999 at full precision
        assert_eq!(cart.display_total(), Decimal::new(1000, 2)); // 10.00 for display
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn serde_roundtrip_cart() {
        let mut cart = Cart::new();
        cart.add(&tee(), 2);
        let json = serde_json::to_string(&cart).expect("serialization failed");
        let decoded: Cart = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, cart);
    }
}

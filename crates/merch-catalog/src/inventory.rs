use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the admin stock list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

/// A validated "Add New Product" submission; ids are allocated by the
/// inventory, never supplied by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventoryItem {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

/// The admin panel's stock list.
///
/// Ordered, unique by id. Kept separate from the storefront
/// [`CatalogStore`](crate::CatalogStore); the admin screen manages stock
/// rows, not the browsing catalog.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock list the admin screen opens with.
    #[must_use]
    pub fn with_default_seed() -> Self {
        let item = |id: u32, name: &str, price: u32, stock: u32| InventoryItem {
            id,
            name: name.to_string(),
            price: Decimal::from(price),
            stock,
        };
        Self {
            items: vec![
                item(1, "Classic Logo Tee", 35, 100),
                item(2, "Minimalist Hoodie", 75, 50),
                item(3, "Signature Cap", 25, 120),
            ],
        }
    }

    #[must_use]
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Append a new item and return its allocated id.
    ///
    /// Ids are `max(id) + 1` over the live list, so a deleted row's id
    /// can be reused only once no higher id remains.
    pub fn add(&mut self, new: NewInventoryItem) -> u32 {
        let id = self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        tracing::info!(id, name = %new.name, "inventory item added");
        self.items.push(InventoryItem {
            id,
            name: new.name,
            price: new.price,
            stock: new.stock,
        });
        id
    }

    /// Remove an item; returns `false` when the id is absent.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() < before;
        if removed {
            tracing::info!(id, "inventory item removed");
        }
        removed
    }
}

mod filter;
mod inventory;
mod query;
mod sort;
mod store;

pub use filter::{FilterConfig, PriceRange};
pub use inventory::{Inventory, InventoryItem, NewInventoryItem};
pub use query::visible_products;
pub use sort::SortKey;
pub use store::CatalogStore;

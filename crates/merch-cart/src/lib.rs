mod cart;
mod events;

pub use cart::{Cart, CartLine};
pub use events::CartEvent;

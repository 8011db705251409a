use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification emitted by a cart mutation, consumed by the rendering
/// layer's toast mechanism. No-op mutations emit nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A quantity of a product was added (new line or accumulation).
    /// `quantity` is the amount added, not the line total — the toast
    /// reads "2 x Minimalist Hoodie added".
    ItemAdded {
        product_id: u32,
        name: String,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
    /// A line's quantity was set directly from the stepper.
    QuantityUpdated {
        product_id: u32,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    },
    /// A line left the cart, whether removed outright or stepped to zero.
    ItemRemoved {
        product_id: u32,
        name: String,
        occurred_at: DateTime<Utc>,
    },
}

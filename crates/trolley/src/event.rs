use serde::{Deserialize, Serialize};

use crate::product::Product;

/// A change record produced by handling a [`CartAction`](crate::CartAction).
///
/// Applying events is the only state transition the cart has.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartEvent {
    /// A new line entered the cart with quantity 1.
    LineAdded {
        /// Snapshot of the product at the moment it was added.
        product: Product,
    },
    /// An existing line's quantity was set to a new positive value.
    QuantitySet {
        /// Product id of the line.
        id: String,
        /// The new quantity, at least 1.
        quantity: u32,
    },
    /// A line left the cart.
    LineRemoved {
        /// Product id of the removed line.
        id: String,
    },
    /// Every line left the cart.
    Cleared,
}

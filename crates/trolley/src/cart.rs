use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::Aggregate;
use crate::event::CartEvent;
use crate::product::Product;
use crate::session::SessionId;

/// One row of the cart: a product snapshot and how many units of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// The product as it looked when first added.
    pub product: Product,
    /// Units of the product, at least 1.
    pub quantity: u32,
}

/// The cart state: an ordered line sequence plus derived totals.
///
/// Lines keep the order their products were first added in, with at most one
/// line per product id. `item_count` and `total` are recomputed from the
/// line sequence after every applied event; they are never mutated
/// independently, so they cannot drift.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    session: SessionId,
    lines: Vec<LineItem>,
    item_count: u64,
    total: f64,
}

impl Cart {
    /// The session this cart belongs to.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Lines in the order their products were first added.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Sum of unit price × quantity across all lines.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line(&self, id: &str) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    fn recompute(&mut self) {
        self.item_count = self.lines.iter().map(|line| u64::from(line.quantity)).sum();
        self.total = self
            .lines
            .iter()
            .map(|line| line.product.price * f64::from(line.quantity))
            .sum();
    }
}

impl Cart {
    /// Add one unit of a product.
    pub fn add_item(&self, product: Product) -> Vec<CartEvent> {
        match self.line(&product.id) {
            Some(line) => vec![CartEvent::QuantitySet {
                id: product.id,
                quantity: line.quantity.saturating_add(1),
            }],
            None => vec![CartEvent::LineAdded { product }],
        }
    }

    /// Set a line's quantity. A quantity below 1 removes the line entirely.
    ///
    /// Referencing an absent line is not an error: independent UI surfaces
    /// can race to mutate the same line, so this handles to nothing.
    pub fn update_quantity(&self, id: &str, quantity: i64) -> Vec<CartEvent> {
        if self.line(id).is_none() {
            return Vec::new();
        }

        if quantity <= 0 {
            return vec![CartEvent::LineRemoved { id: id.to_owned() }];
        }

        vec![CartEvent::QuantitySet {
            id: id.to_owned(),
            quantity: u32::try_from(quantity).unwrap_or(u32::MAX),
        }]
    }

    /// Remove a line. Removing twice has the same effect as once.
    pub fn remove_item(&self, id: &str) -> Vec<CartEvent> {
        if self.line(id).is_none() {
            return Vec::new();
        }

        vec![CartEvent::LineRemoved { id: id.to_owned() }]
    }

    /// Empty the cart.
    pub fn clear(&self) -> Vec<CartEvent> {
        if self.lines.is_empty() {
            return Vec::new();
        }

        vec![CartEvent::Cleared]
    }

    /// Rebuild a cart from a previously serialized line sequence.
    ///
    /// The persistence collaborator calls this at session start. Lines whose
    /// product the catalog no longer recognises are dropped, as are lines
    /// duplicating an earlier product id and lines with a zero quantity.
    /// Derived totals are recomputed before the cart is returned.
    pub fn rehydrate<F>(session: SessionId, lines: Vec<LineItem>, mut still_valid: F) -> Cart
    where
        F: FnMut(&Product) -> bool,
    {
        let mut cart = Cart::new(session);
        for line in lines {
            if line.quantity == 0 {
                warn!(id = %line.product.id, "dropping rehydrated line with zero quantity");
                continue;
            }
            if cart.line(&line.product.id).is_some() {
                warn!(id = %line.product.id, "dropping duplicate rehydrated line");
                continue;
            }
            if !still_valid(&line.product) {
                warn!(id = %line.product.id, "dropping rehydrated line for unknown product");
                continue;
            }
            cart.lines.push(line);
        }
        cart.recompute();
        cart
    }
}

impl Aggregate for Cart {
    type ID = SessionId;
    type Event = CartEvent;

    fn new(session: SessionId) -> Self {
        Cart {
            session,
            lines: Vec::new(),
            item_count: 0,
            total: 0.0,
        }
    }

    fn id(&self) -> &SessionId {
        &self.session
    }

    fn apply(&mut self, event: CartEvent) {
        use CartEvent::*;

        match event {
            LineAdded { product } => {
                self.lines.push(LineItem { product, quantity: 1 });
            }
            QuantitySet { id, quantity } => {
                // A line never holds quantity 0; setting it means removal.
                if quantity == 0 {
                    self.lines.retain(|line| line.product.id != id);
                } else if let Some(line) =
                    self.lines.iter_mut().find(|line| line.product.id == id)
                {
                    line.quantity = quantity;
                }
            }
            LineRemoved { id } => {
                self.lines.retain(|line| line.product.id != id);
            }
            Cleared => {
                self.lines.clear();
            }
        }

        self.recompute();
    }
}

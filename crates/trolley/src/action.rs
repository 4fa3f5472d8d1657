use serde::Serialize;
use serde_json::Value;

use crate::error::CartError;
use crate::product::Product;

/// A command dispatched into the cart store.
///
/// On the wire, actions take the shape `{"type": "...", "payload": ...}` as
/// sent by the UI surfaces; [`CartAction::from_json`] parses that form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add one unit of a product, creating its line if absent.
    AddItem(Product),
    /// Set a line's quantity; anything below 1 removes the line.
    UpdateQuantity {
        /// Product id of the line to update.
        id: String,
        /// The requested quantity.
        quantity: i64,
    },
    /// Remove a line if present. No-op when absent.
    RemoveItem(String),
    /// Empty the cart.
    ClearCart,
}

impl CartAction {
    /// Parse an action from its wire form.
    ///
    /// An unrecognised `type` tag fails with [`CartError::InvalidAction`]; a
    /// payload that does not match the tag fails with
    /// [`CartError::MalformedAction`]. A malformed quantity value is clamped
    /// toward removal instead of being reported, so a stray input from a UI
    /// surface never wedges the dispatch path.
    pub fn from_json(raw: &str) -> Result<Self, CartError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|err| CartError::MalformedAction(err.to_string()))?;
        Self::from_value(value)
    }

    /// Parse an action from an already-decoded wire value.
    pub fn from_value(value: Value) -> Result<Self, CartError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| CartError::MalformedAction("missing 'type' tag".to_owned()))?
            .to_owned();
        let payload = value.get("payload").cloned().unwrap_or(Value::Null);

        match tag.as_str() {
            "ADD_ITEM" => {
                let product: Product = serde_json::from_value(payload)
                    .map_err(|err| CartError::MalformedAction(err.to_string()))?;
                Ok(CartAction::AddItem(product))
            }
            "UPDATE_QUANTITY" => {
                let id = payload
                    .get("id")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        CartError::MalformedAction("UPDATE_QUANTITY payload missing 'id'".to_owned())
                    })?
                    .to_owned();
                let quantity = payload.get("quantity").map_or(0, wire_quantity);
                Ok(CartAction::UpdateQuantity { id, quantity })
            }
            "REMOVE_ITEM" => {
                let id = payload
                    .as_str()
                    .ok_or_else(|| {
                        CartError::MalformedAction("REMOVE_ITEM payload must be a product id".to_owned())
                    })?
                    .to_owned();
                Ok(CartAction::RemoveItem(id))
            }
            "CLEAR_CART" => Ok(CartAction::ClearCart),
            _ => Err(CartError::InvalidAction(tag)),
        }
    }
}

/// Interpret a wire quantity, clamping anything malformed toward removal.
///
/// Fractions truncate toward zero; non-numeric and non-finite values become
/// 0, which the cart treats as removal.
fn wire_quantity(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

use tracing::{debug, trace};

use crate::action::CartAction;
use crate::aggregate::Aggregate;
use crate::cart::Cart;
use crate::error::CartError;
use crate::session::SessionId;

/// The cart state container.
///
/// One instance is shared across every UI surface of a session: product
/// cards, the detail page, the cart sidebar and the cart page all dispatch
/// against the same store. Dispatches are synchronous and run to completion,
/// so each one observes the fully-updated result of all prior dispatches.
#[derive(Clone, Debug)]
pub struct CartStore {
    cart: Cart,
}

impl CartStore {
    /// Create an empty store with a fresh session id.
    pub fn new() -> Self {
        Self::with_session(SessionId::generate())
    }

    /// Create an empty store for an existing session.
    pub fn with_session(session: SessionId) -> Self {
        CartStore {
            cart: Cart::new(session),
        }
    }

    /// Wrap a cart rebuilt by [`Cart::rehydrate`].
    pub fn from_cart(cart: Cart) -> Self {
        CartStore { cart }
    }

    /// The published snapshot: lines, item count and total.
    pub fn state(&self) -> &Cart {
        &self.cart
    }

    /// Dispatch a cart action.
    ///
    /// The returned state reflects this action and every prior dispatch,
    /// with derived totals already recomputed. Actions referencing a line
    /// that is not present are benign no-ops.
    pub fn dispatch(&mut self, action: CartAction) -> &Cart {
        trace!(session = %self.cart.id(), ?action, "dispatching cart action");

        let events = match action {
            CartAction::AddItem(product) => self.cart.add_item(product),
            CartAction::UpdateQuantity { id, quantity } => {
                self.cart.update_quantity(&id, quantity)
            }
            CartAction::RemoveItem(id) => self.cart.remove_item(&id),
            CartAction::ClearCart => self.cart.clear(),
        };

        if events.is_empty() {
            debug!(session = %self.cart.id(), "cart action had no effect");
        }
        for event in events {
            self.cart.apply(event);
        }

        &self.cart
    }

    /// Dispatch an action in its wire form.
    ///
    /// An action that fails to parse is reported to the caller and leaves
    /// the state untouched.
    pub fn dispatch_json(&mut self, raw: &str) -> Result<&Cart, CartError> {
        let action = CartAction::from_json(raw).map_err(|err| {
            debug!(session = %self.cart.id(), %err, "cart action rejected");
            err
        })?;
        Ok(self.dispatch(action))
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

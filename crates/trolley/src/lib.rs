//! A reducer-driven shopping cart state container.
//!
//! A [`CartStore`] holds the cart for one UI session. Every mutation flows
//! through its single [`dispatch`](CartStore::dispatch) entry point, and the
//! derived item count and total are recomputed from the line sequence before
//! the new state can be observed. Consumers read the published snapshot via
//! [`state`](CartStore::state) and never write the line sequence directly.
//!
//! ```
//! use trolley::{CartAction, CartStore};
//! # use chrono::{TimeZone, Utc};
//! # let headphones = trolley::Product {
//! #     id: "1".to_owned(),
//! #     name: "Wireless Bluetooth Headphones".to_owned(),
//! #     description: String::new(),
//! #     price: 99.99,
//! #     category: "Electronics".to_owned(),
//! #     image_url: String::new(),
//! #     rating: 4.5,
//! #     stock: 25,
//! #     created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
//! #     reviews: Vec::new(),
//! # };
//! let mut store = CartStore::new();
//! store.dispatch(CartAction::AddItem(headphones.clone()));
//! store.dispatch(CartAction::AddItem(headphones));
//!
//! let cart = store.state();
//! assert_eq!(cart.lines().len(), 1);
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(), 199.98);
//! ```

pub use action::CartAction;
pub use aggregate::Aggregate;
pub use cart::{Cart, LineItem};
pub use error::CartError;
pub use event::CartEvent;
pub use product::{Category, Product, Review};
pub use session::SessionId;
pub use store::CartStore;

mod action;
mod aggregate;
mod cart;
mod error;
mod event;
mod product;
mod session;
mod store;

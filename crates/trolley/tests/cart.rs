use chrono::{TimeZone, Utc};
use trolley::{Cart, CartAction, CartEvent, CartStore, LineItem, Product, SessionId};
use trolley_testing::*;

fn product(id: &str, price: f64) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Product {id}"),
        description: String::new(),
        price,
        category: "Test".to_owned(),
        image_url: String::new(),
        rating: 4.0,
        stock: 10,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        reviews: Vec::new(),
    }
}

fn derived_consistent(cart: &Cart) -> bool {
    let item_count: u64 = cart.lines().iter().map(|line| u64::from(line.quantity)).sum();
    let total: f64 = cart
        .lines()
        .iter()
        .map(|line| line.product.price * f64::from(line.quantity))
        .sum();

    cart.item_count() == item_count && cart.total() == total
}

#[test]
fn add_item_creates_then_increments() {
    let headphones = product("a", 10.0);

    let cart = Cart::given_no_events(SessionId::generate())
        // First add creates the line
        .when(|cart| cart.add_item(headphones.clone()))
        .then(vec![CartEvent::LineAdded {
            product: headphones.clone(),
        }])
        .apply()
        // Second add increments it
        .when(|cart| cart.add_item(headphones.clone()))
        .then(vec![CartEvent::QuantitySet {
            id: "a".to_owned(),
            quantity: 2,
        }])
        .apply()
        .into_state();

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total(), 20.0);
}

#[test]
fn repeated_adds_keep_one_line_per_product() {
    let mut store = CartStore::new();
    for _ in 0..7 {
        store.dispatch(CartAction::AddItem(product("a", 10.0)));
    }

    assert_eq!(store.state().lines().len(), 1);
    assert_eq!(store.state().item_count(), 7);
    assert_eq!(store.state().total(), 70.0);
}

#[test]
fn update_quantity_sets_and_removes() {
    let headphones = product("a", 10.0);

    Cart::given(
        SessionId::generate(),
        CartEvent::LineAdded {
            product: headphones,
        },
    )
    // Set to 5
    .when(|cart| cart.update_quantity("a", 5))
    .then(vec![CartEvent::QuantitySet {
        id: "a".to_owned(),
        quantity: 5,
    }])
    .apply()
    // Drop to 0 removes the line entirely
    .when(|cart| cart.update_quantity("a", 0))
    .then(vec![CartEvent::LineRemoved { id: "a".to_owned() }])
    .apply()
    .should_be_unchanged();
}

#[test]
fn update_quantity_on_absent_line_is_a_no_op() {
    Cart::given_no_events(SessionId::generate())
        .when(|cart| cart.update_quantity("ghost", 3))
        .then(Vec::<CartEvent>::new())
        .apply()
        .should_be_unchanged();
}

#[test]
fn negative_quantity_removes_like_zero() {
    let cart = Cart::given(
        SessionId::generate(),
        CartEvent::LineAdded {
            product: product("a", 10.0),
        },
    )
    .when(|cart| cart.update_quantity("a", -3))
    .then(vec![CartEvent::LineRemoved { id: "a".to_owned() }])
    .apply()
    .into_state();

    assert!(cart.is_empty());
}

#[test]
fn positive_update_after_removal_readds_a_single_line() {
    let headphones = product("a", 10.0);
    let mut store = CartStore::new();

    store.dispatch(CartAction::AddItem(headphones.clone()));
    store.dispatch(CartAction::UpdateQuantity {
        id: "a".to_owned(),
        quantity: 0,
    });
    assert!(store.state().is_empty());

    // Re-adding goes through ADD_ITEM again; quantity updates on the
    // removed line stay no-ops.
    store.dispatch(CartAction::UpdateQuantity {
        id: "a".to_owned(),
        quantity: 4,
    });
    assert!(store.state().is_empty());

    store.dispatch(CartAction::AddItem(headphones));
    store.dispatch(CartAction::UpdateQuantity {
        id: "a".to_owned(),
        quantity: 4,
    });
    assert_eq!(store.state().lines().len(), 1);
    assert_eq!(store.state().item_count(), 4);
}

#[test]
fn remove_item_is_idempotent() {
    let removed_once = Cart::given(
        SessionId::generate(),
        CartEvent::LineAdded {
            product: product("a", 10.0),
        },
    )
    .when(|cart| cart.remove_item("a"))
    .then(vec![CartEvent::LineRemoved { id: "a".to_owned() }])
    .apply()
    // Removing again handles to nothing
    .when(|cart| cart.remove_item("a"))
    .then(Vec::<CartEvent>::new())
    .apply()
    .into_state();

    assert!(removed_once.is_empty());
    assert_eq!(removed_once.item_count(), 0);
    assert_eq!(removed_once.total(), 0.0);
}

#[test]
fn clear_cart_empties_everything() {
    let cart = Cart::given_events(
        SessionId::generate(),
        vec![
            CartEvent::LineAdded {
                product: product("a", 10.0),
            },
            CartEvent::LineAdded {
                product: product("b", 20.0),
            },
            CartEvent::QuantitySet {
                id: "a".to_owned(),
                quantity: 3,
            },
        ],
    )
    .when(|cart| cart.clear())
    .then(vec![CartEvent::Cleared])
    .apply()
    .into_state();

    assert!(cart.lines().is_empty());
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn clear_on_an_empty_cart_produces_no_events() {
    let events = Cart::given_no_events(SessionId::generate())
        .when(|cart| cart.clear())
        .into_result();
    assert!(events.is_empty());
}

#[test]
fn update_path_equals_event_replay() {
    let session = SessionId::generate();
    let headphones = product("a", 10.0);

    let expected = Cart::given_events(
        session.clone(),
        vec![
            CartEvent::LineAdded {
                product: headphones.clone(),
            },
            CartEvent::QuantitySet {
                id: "a".to_owned(),
                quantity: 5,
            },
        ],
    )
    .into_state();

    Cart::given_no_events(session)
        .when(|cart| cart.add_item(headphones.clone()))
        .apply()
        .when(|cart| cart.update_quantity("a", 5))
        .apply()
        .should_eq(expected);
}

#[test]
fn full_flow_on_a_single_product() {
    let mut store = CartStore::new();

    store.dispatch(CartAction::AddItem(product("a", 10.0)));
    store.dispatch(CartAction::AddItem(product("a", 10.0)));
    assert_eq!(store.state().lines().len(), 1);
    assert_eq!(store.state().lines()[0].quantity, 2);
    assert_eq!(store.state().total(), 20.0);

    store.dispatch(CartAction::UpdateQuantity {
        id: "a".to_owned(),
        quantity: 5,
    });
    assert_eq!(store.state().lines()[0].quantity, 5);
    assert_eq!(store.state().total(), 50.0);

    store.dispatch(CartAction::RemoveItem("a".to_owned()));
    assert!(store.state().is_empty());
    assert_eq!(store.state().total(), 0.0);
}

#[test]
fn two_products_keep_insertion_order() {
    let mut store = CartStore::new();

    store.dispatch(CartAction::AddItem(product("a", 10.0)));
    store.dispatch(CartAction::AddItem(product("b", 20.0)));

    let cart = store.state();
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total(), 30.0);
    let order: Vec<&str> = cart.lines().iter().map(|line| line.product.id.as_str()).collect();
    assert_eq!(order, ["a", "b"]);
}

#[test]
fn derived_totals_hold_after_every_dispatch() {
    let actions = vec![
        CartAction::AddItem(product("a", 9.99)),
        CartAction::AddItem(product("b", 24.99)),
        CartAction::AddItem(product("a", 9.99)),
        CartAction::UpdateQuantity {
            id: "b".to_owned(),
            quantity: 4,
        },
        CartAction::RemoveItem("ghost".to_owned()),
        CartAction::UpdateQuantity {
            id: "a".to_owned(),
            quantity: 0,
        },
        CartAction::AddItem(product("c", 49.99)),
        CartAction::RemoveItem("b".to_owned()),
        CartAction::ClearCart,
        CartAction::ClearCart,
    ];

    let mut store = CartStore::new();
    for action in actions {
        let cart = store.dispatch(action);
        assert!(derived_consistent(cart));
    }
    assert!(store.state().is_empty());
}

#[test]
fn rehydrate_validates_lines_and_recomputes() {
    let session = SessionId::generate();
    let lines = vec![
        LineItem {
            product: product("a", 10.0),
            quantity: 2,
        },
        // Unknown to the catalog by now
        LineItem {
            product: product("discontinued", 99.0),
            quantity: 1,
        },
        // Duplicate of an earlier line
        LineItem {
            product: product("a", 10.0),
            quantity: 9,
        },
        LineItem {
            product: product("b", 20.0),
            quantity: 0,
        },
    ];

    let cart = Cart::rehydrate(session.clone(), lines, |p| p.id != "discontinued");

    assert_eq!(cart.session(), &session);
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total(), 20.0);

    // A rehydrated cart keeps accepting dispatches through a store.
    let mut store = CartStore::from_cart(cart);
    store.dispatch(CartAction::AddItem(product("b", 20.0)));
    assert_eq!(store.state().item_count(), 3);
    assert_eq!(store.state().total(), 40.0);
}

#[test]
fn cart_round_trips_through_serde() {
    let mut store = CartStore::new();
    store.dispatch(CartAction::AddItem(product("a", 10.0)));
    store.dispatch(CartAction::AddItem(product("b", 20.0)));
    store.dispatch(CartAction::UpdateQuantity {
        id: "a".to_owned(),
        quantity: 3,
    });

    let json = serde_json::to_string(store.state()).unwrap();
    let restored: Cart = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, store.state());
    assert!(derived_consistent(&restored));
}

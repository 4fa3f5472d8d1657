//! The four UI surfaces of the storefront, simulated against one shared
//! cart store: product card quick-add, product detail page, cart sidebar and
//! cart page.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use trolley::{Cart, CartAction, CartStore, Category, Product, SessionId};
use trolley_catalog::{
    CatalogClient, CatalogError, CatalogSource, DataOrigin, FixtureCatalog, ProductFilter, SortKey,
};

/// Storefront demo
#[derive(Parser, Debug)]
struct Cli {
    /// Simulate an unreachable product API to exercise the fixture fallback
    #[clap(long)]
    offline: bool,
    /// Maximum number of products to browse
    #[clap(long, default_value_t = 8)]
    limit: usize,
}

/// Stand-in for the product API: serves fixture records, or refuses every
/// request when offline.
struct DemoApi {
    offline: bool,
    records: FixtureCatalog,
}

impl DemoApi {
    fn check_reachable(&self) -> Result<(), CatalogError> {
        if self.offline {
            return Err(CatalogError::Unavailable("connection refused".to_owned()));
        }
        Ok(())
    }
}

impl CatalogSource for DemoApi {
    fn products(&self, limit: Option<usize>) -> Result<Vec<Product>, CatalogError> {
        self.check_reachable()?;
        Ok(self.records.products(limit))
    }

    fn product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        self.check_reachable()?;
        Ok(self.records.product(id))
    }

    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.check_reachable()?;
        Ok(self.records.categories())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::try_parse()?;

    let client = CatalogClient::new(DemoApi {
        offline: cli.offline,
        records: FixtureCatalog::default(),
    });

    // Browse products. One parametrized filter drives every product page.
    let response = client.products(Some(cli.limit));
    if response.origin == DataOrigin::Fallback {
        info!("product API unreachable, showing demo data");
    }

    let filter = ProductFilter {
        categories: vec!["Electronics".to_owned()],
        sort: SortKey::PriceLowToHigh,
        ..ProductFilter::default()
    };
    let electronics = filter.apply(&response.data);
    let featured = electronics
        .first()
        .context("no products matched the filter")?;
    let second = electronics
        .get(1)
        .context("expected more than one matching product")?;

    // One store, shared by reference across every surface.
    let store = Rc::new(RefCell::new(CartStore::new()));
    info!(session = %store.borrow().state().session(), "session started");

    // Product card: quick-add the featured product, twice.
    let card = Rc::clone(&store);
    card.borrow_mut()
        .dispatch(CartAction::AddItem(featured.clone()));
    card.borrow_mut()
        .dispatch(CartAction::AddItem(featured.clone()));
    print_cart("after product card quick-adds", card.borrow().state());

    // Product detail page: add a second product.
    let detail = Rc::clone(&store);
    detail
        .borrow_mut()
        .dispatch(CartAction::AddItem(second.clone()));
    print_cart("after product detail add", detail.borrow().state());

    // Cart sidebar: the quantity stepper speaks the wire format.
    let sidebar = Rc::clone(&store);
    let update = format!(
        r#"{{"type":"UPDATE_QUANTITY","payload":{{"id":"{}","quantity":5}}}}"#,
        featured.id
    );
    sidebar
        .borrow_mut()
        .dispatch_json(&update)
        .context("sidebar dispatch failed")?;
    print_cart("after sidebar quantity change", sidebar.borrow().state());

    // A stray action from an outdated surface is reported, never applied.
    if let Err(err) = sidebar
        .borrow_mut()
        .dispatch_json(r#"{"type":"SAVE_FOR_LATER","payload":"1"}"#)
    {
        info!(%err, "rejected stray action");
    }

    // The session collaborator would persist lines on every change; show the
    // round trip, revalidating against the catalog.
    let saved = serde_json::to_string(store.borrow().state().lines())?;
    let restored = Cart::rehydrate(
        SessionId::generate(),
        serde_json::from_str(&saved)?,
        |product| client.product(&product.id).data.is_some(),
    );
    print_cart("rehydrated in a new session", &restored);

    // Cart page: remove one line, then empty the cart.
    let page = Rc::clone(&store);
    page.borrow_mut()
        .dispatch(CartAction::RemoveItem(second.id.clone()));
    print_cart("after cart page removal", page.borrow().state());

    page.borrow_mut().dispatch(CartAction::ClearCart);
    print_cart("after clearing the cart", page.borrow().state());

    Ok(())
}

fn print_cart(heading: &str, cart: &Cart) {
    println!("{heading}: {} items, ${:.2}", cart.item_count(), cart.total());
    for line in cart.lines() {
        println!(
            "  {} x {} @ ${:.2}",
            line.quantity, line.product.name, line.product.price
        );
    }
}

//! Catalog collaborator for [trolley](https://docs.rs/trolley) carts.
//!
//! Supplies [`Product`](trolley::Product) and [`Category`](trolley::Category)
//! records to the cart and UI layers through a read-only fetch interface.
//! When the primary source fails, [`CatalogClient`] serves canned fixture
//! data and tags the response [`DataOrigin::Fallback`], so consumers always
//! know whether they are looking at live records or demo data.

pub use client::{CatalogClient, CatalogResponse, DataOrigin};
pub use error::CatalogError;
pub use filter::{ProductFilter, SortKey};
pub use fixtures::FixtureCatalog;
pub use source::CatalogSource;

mod client;
mod error;
mod filter;
mod fixtures;
mod source;

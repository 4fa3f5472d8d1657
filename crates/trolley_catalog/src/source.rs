use trolley::{Category, Product};

use crate::error::CatalogError;

/// Read-only access to product and category records.
///
/// The cart and UI layers treat everything returned here as opaque,
/// immutable snapshots at the moment they were fetched.
pub trait CatalogSource {
    /// List products in catalog order, up to `limit` when given.
    fn products(&self, limit: Option<usize>) -> Result<Vec<Product>, CatalogError>;

    /// Look up a single product by id.
    fn product(&self, id: &str) -> Result<Option<Product>, CatalogError>;

    /// List categories.
    fn categories(&self) -> Result<Vec<Category>, CatalogError>;
}

use serde::Serialize;
use tracing::warn;
use trolley::{Category, Product};

use crate::fixtures::FixtureCatalog;
use crate::source::CatalogSource;

/// Where a catalog response's records came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    /// Served by the primary source.
    Live,
    /// The primary source failed; fixture data was served instead.
    Fallback,
}

/// A catalog response tagged with the origin of its records.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogResponse<T> {
    /// The fetched records.
    pub data: T,
    /// Whether the records are live or canned.
    pub origin: DataOrigin,
}

impl<T> CatalogResponse<T> {
    fn live(data: T) -> Self {
        CatalogResponse {
            data,
            origin: DataOrigin::Live,
        }
    }

    fn fallback(data: T) -> Self {
        CatalogResponse {
            data,
            origin: DataOrigin::Fallback,
        }
    }
}

/// Catalog client with an explicit offline fallback.
///
/// Wraps a primary [`CatalogSource`]. When the primary fails, the request is
/// answered from [`FixtureCatalog`] records and the response is tagged
/// [`DataOrigin::Fallback`], so the substitution is always observable to
/// the consumer, never silent.
#[derive(Clone, Debug)]
pub struct CatalogClient<S> {
    primary: S,
    fixtures: FixtureCatalog,
}

impl<S> CatalogClient<S>
where
    S: CatalogSource,
{
    /// Wrap a primary source, falling back to the default fixture set.
    pub fn new(primary: S) -> Self {
        CatalogClient {
            primary,
            fixtures: FixtureCatalog::default(),
        }
    }

    /// Fetch products, up to `limit` when given.
    pub fn products(&self, limit: Option<usize>) -> CatalogResponse<Vec<Product>> {
        match self.primary.products(limit) {
            Ok(products) => CatalogResponse::live(products),
            Err(err) => {
                warn!(%err, "primary catalog failed, serving fixture products");
                CatalogResponse::fallback(self.fixtures.products(limit))
            }
        }
    }

    /// Fetch a single product by id.
    pub fn product(&self, id: &str) -> CatalogResponse<Option<Product>> {
        match self.primary.product(id) {
            Ok(product) => CatalogResponse::live(product),
            Err(err) => {
                warn!(%err, id, "primary catalog failed, serving fixture product");
                CatalogResponse::fallback(self.fixtures.product(id))
            }
        }
    }

    /// Fetch categories.
    pub fn categories(&self) -> CatalogResponse<Vec<Category>> {
        match self.primary.categories() {
            Ok(categories) => CatalogResponse::live(categories),
            Err(err) => {
                warn!(%err, "primary catalog failed, serving fixture categories");
                CatalogResponse::fallback(self.fixtures.categories())
            }
        }
    }
}

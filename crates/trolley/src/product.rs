use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product record supplied by the catalog.
///
/// The cart treats products as opaque, immutable snapshots taken at the
/// moment they are added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier, unique per product.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Category name the product belongs to.
    pub category: String,
    /// Display image.
    pub image_url: String,
    /// Average review rating, 0 to 5.
    pub rating: f64,
    /// Units the catalog reports in stock.
    pub stock: u32,
    /// When the product entered the catalog.
    pub created_at: DateTime<Utc>,
    /// Reviews embedded with the record, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

/// A customer review attached to a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Review identifier.
    pub id: String,
    /// Display name of the reviewer.
    pub user_name: String,
    /// Rating given, 0 to 5.
    pub rating: f64,
    /// Review body.
    pub comment: String,
    /// When the review was left.
    pub created_at: DateTime<Utc>,
}

/// A product category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: String,
    /// Display name, as referenced by [`Product::category`].
    pub name: String,
    /// Short description.
    pub description: String,
    /// Number of products the catalog holds in this category.
    pub product_count: u32,
}

use chrono::{DateTime, TimeZone, Utc};
use trolley::{Category, Product};

use crate::error::CatalogError;
use crate::source::CatalogSource;

/// Canned catalog records.
///
/// This is what [`CatalogClient`](crate::CatalogClient) serves when the
/// primary source is unreachable, and a convenient stand-in source for demos
/// and tests. Categories are derived from the product set so their counts
/// never disagree with the records.
#[derive(Clone, Debug)]
pub struct FixtureCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl FixtureCatalog {
    /// List fixture products, up to `limit` when given.
    pub fn products(&self, limit: Option<usize>) -> Vec<Product> {
        match limit {
            Some(limit) => self.products.iter().take(limit).cloned().collect(),
            None => self.products.clone(),
        }
    }

    /// Look up a fixture product by id.
    pub fn product(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|product| product.id == id).cloned()
    }

    /// List fixture categories.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        let products = fixture_products();
        let categories = derive_categories(&products);
        FixtureCatalog {
            products,
            categories,
        }
    }
}

impl CatalogSource for FixtureCatalog {
    fn products(&self, limit: Option<usize>) -> Result<Vec<Product>, CatalogError> {
        Ok(FixtureCatalog::products(self, limit))
    }

    fn product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        Ok(FixtureCatalog::product(self, id))
    }

    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(FixtureCatalog::categories(self))
    }
}

fn derive_categories(products: &[Product]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for product in products {
        match categories.iter_mut().find(|c| c.name == product.category) {
            Some(category) => category.product_count += 1,
            None => categories.push(Category {
                id: (categories.len() + 1).to_string(),
                name: product.category.clone(),
                description: format!("Everything in {}", product.category),
                product_count: 1,
            }),
        }
    }
    categories
}

fn listed(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Fixture literals are known-valid dates.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn fixture_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_owned(),
            name: "Wireless Bluetooth Headphones".to_owned(),
            description: "High-quality wireless headphones with noise cancellation and long battery life.".to_owned(),
            price: 99.99,
            category: "Electronics".to_owned(),
            image_url: "https://picsum.photos/seed/headphones/400/300".to_owned(),
            rating: 4.5,
            stock: 25,
            created_at: listed(2025, 5, 28),
            reviews: Vec::new(),
        },
        Product {
            id: "2".to_owned(),
            name: "Premium Cotton T-Shirt".to_owned(),
            description: "Comfortable and stylish cotton t-shirt made from 100% organic cotton.".to_owned(),
            price: 29.99,
            category: "Clothing".to_owned(),
            image_url: "https://picsum.photos/seed/tshirt/400/300".to_owned(),
            rating: 4.2,
            stock: 50,
            created_at: listed(2025, 5, 23),
            reviews: Vec::new(),
        },
        Product {
            id: "3".to_owned(),
            name: "Smart Fitness Watch".to_owned(),
            description: "Track your fitness goals with heart rate monitoring and GPS.".to_owned(),
            price: 199.99,
            category: "Electronics".to_owned(),
            image_url: "https://picsum.photos/seed/watch/400/300".to_owned(),
            rating: 4.7,
            stock: 15,
            created_at: listed(2025, 5, 31),
            reviews: Vec::new(),
        },
        Product {
            id: "4".to_owned(),
            name: "Organic Coffee Beans".to_owned(),
            description: "Premium organic coffee beans sourced from sustainable farms.".to_owned(),
            price: 24.99,
            category: "Food".to_owned(),
            image_url: "https://picsum.photos/seed/coffee/400/300".to_owned(),
            rating: 4.8,
            stock: 100,
            created_at: listed(2025, 5, 18),
            reviews: Vec::new(),
        },
        Product {
            id: "5".to_owned(),
            name: "Yoga Mat Pro".to_owned(),
            description: "Non-slip yoga mat made from eco-friendly materials.".to_owned(),
            price: 49.99,
            category: "Sports".to_owned(),
            image_url: "https://picsum.photos/seed/yoga/400/300".to_owned(),
            rating: 4.4,
            stock: 30,
            created_at: listed(2025, 5, 26),
            reviews: Vec::new(),
        },
        Product {
            id: "6".to_owned(),
            name: "Skincare Serum Set".to_owned(),
            description: "Complete skincare routine with vitamin C serum and hyaluronic acid.".to_owned(),
            price: 79.99,
            category: "Beauty".to_owned(),
            image_url: "https://picsum.photos/seed/skincare/400/300".to_owned(),
            rating: 4.6,
            stock: 20,
            created_at: listed(2025, 5, 30),
            reviews: Vec::new(),
        },
        Product {
            id: "7".to_owned(),
            name: "Stainless Steel Water Bottle".to_owned(),
            description: "Insulated bottle that keeps drinks cold for 24 hours or hot for 12.".to_owned(),
            price: 34.99,
            category: "Home & Kitchen".to_owned(),
            image_url: "https://picsum.photos/seed/bottle/400/300".to_owned(),
            rating: 4.3,
            stock: 75,
            created_at: listed(2025, 5, 21),
            reviews: Vec::new(),
        },
        Product {
            id: "8".to_owned(),
            name: "Wireless Gaming Mouse".to_owned(),
            description: "High-precision wireless mouse with programmable buttons.".to_owned(),
            price: 89.99,
            category: "Electronics".to_owned(),
            image_url: "https://picsum.photos/seed/mouse/400/300".to_owned(),
            rating: 4.5,
            stock: 40,
            created_at: listed(2025, 6, 1),
            reviews: Vec::new(),
        },
    ]
}

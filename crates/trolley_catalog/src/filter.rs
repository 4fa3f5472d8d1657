use trolley::Product;

/// Sort order applied after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Catalog order, unchanged.
    #[default]
    Featured,
    /// Most recently listed first.
    Newest,
    /// Highest rated first.
    Rating,
    /// Cheapest first.
    PriceLowToHigh,
    /// Most expensive first.
    PriceHighToLow,
}

/// The filter state every product page shares.
///
/// One parametrized function over the product list, instead of each page
/// carrying its own copy of search term, category set, price range, minimum
/// rating and sort key.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive match against product name and description.
    pub search: String,
    /// Category names to include. Empty matches every category.
    pub categories: Vec<String>,
    /// Inclusive price bounds.
    pub price_range: (f64, f64),
    /// Minimum product rating.
    pub min_rating: f64,
    /// Ordering of the filtered list.
    pub sort: SortKey,
}

impl Default for ProductFilter {
    fn default() -> Self {
        ProductFilter {
            search: String::new(),
            categories: Vec::new(),
            price_range: (0.0, 1000.0),
            min_rating: 0.0,
            sort: SortKey::Featured,
        }
    }
}

impl ProductFilter {
    /// Whether a single product passes every predicate.
    pub fn matches(&self, product: &Product) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || product.name.to_lowercase().contains(&search)
            || product.description.to_lowercase().contains(&search);
        let matches_category =
            self.categories.is_empty() || self.categories.iter().any(|c| c == &product.category);
        let matches_price =
            product.price >= self.price_range.0 && product.price <= self.price_range.1;
        let matches_rating = product.rating >= self.min_rating;

        matches_search && matches_category && matches_price && matches_rating
    }

    /// Filter and sort a product list.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut filtered: Vec<Product> = products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Featured => {}
            SortKey::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Rating => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::PriceLowToHigh => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceHighToLow => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        filtered
    }
}

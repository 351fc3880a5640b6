//! Static product catalog - Handles all catalog query operations.
//!
//! The catalog is an immutable, ordered list of products built once at
//! startup, either from a TOML file or from the built-in sample data. It
//! supports exact lookup by id, case-insensitive category filtering (with
//! the `"all"` sentinel), and case-insensitive substring search over the
//! category and description fields. All queries are pure; nothing here
//! mutates state.

use crate::errors::{Error, Result};
use serde::Deserialize;
use tracing::debug;

/// A single purchasable product record.
///
/// Products are created once when the catalog is built and never mutated
/// or destroyed afterwards. Cart lines hold cloned snapshots of these
/// records, which is safe precisely because they are immutable.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique positive identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Image location for the rendering layer
    pub image_url: String,
    /// Category label, compared case-insensitively
    pub category: String,
    /// Free-text description
    pub description: String,
}

/// Immutable, ordered collection of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Category sentinel that selects the whole catalog.
pub const ALL_CATEGORIES: &str = "all";

impl Catalog {
    /// Builds a catalog from product records, validating each one.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Any product id is non-positive or duplicated
    /// - Any product name is empty or whitespace-only
    /// - Any price is negative or not finite (NaN, infinity)
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen_ids = Vec::with_capacity(products.len());
        for product in &products {
            if product.id <= 0 {
                return Err(Error::Catalog {
                    message: format!("product id must be positive, got {}", product.id),
                });
            }
            if seen_ids.contains(&product.id) {
                return Err(Error::Catalog {
                    message: format!("duplicate product id {}", product.id),
                });
            }
            if product.name.trim().is_empty() {
                return Err(Error::Catalog {
                    message: format!("product {} has an empty name", product.id),
                });
            }
            if product.price < 0.0 || !product.price.is_finite() {
                return Err(Error::InvalidPrice {
                    price: product.price,
                });
            }
            seen_ids.push(product.id);
        }

        debug!("Catalog built with {} products", products.len());
        Ok(Self { products })
    }

    /// Returns the built-in sample catalog.
    ///
    /// Used when no catalog file is configured, so the binary works out of
    /// the box.
    #[must_use]
    pub fn sample() -> Self {
        // Data is static and validated by tests, so construction cannot fail
        Self {
            products: sample_products(),
        }
    }

    /// Retrieves a product by its unique id, returning `None` if absent.
    #[must_use]
    pub fn find_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns products whose category matches, case-insensitively.
    ///
    /// Passing [`ALL_CATEGORIES`] (in any casing) returns the full catalog
    /// unfiltered, order preserved.
    #[must_use]
    pub fn filter_by_category(&self, category: &str) -> Vec<&Product> {
        if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Returns products whose category or description contains the term,
    /// case-insensitively.
    ///
    /// An empty term matches every product (substring match against the
    /// empty string is always true), which makes clearing the search box
    /// restore the full listing without a special case.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.category.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Running Pro X1".to_string(),
            price: 99.99,
            image_url: "https://example.com/images/shoes/running-pro-x1.jpg".to_string(),
            category: "Running".to_string(),
            description: "Lightweight running shoes with extra cushioning".to_string(),
        },
        Product {
            id: 2,
            name: "Casual Walker".to_string(),
            price: 79.50,
            image_url: "https://example.com/images/shoes/casual-walker.jpg".to_string(),
            category: "Casual".to_string(),
            description: "Comfortable everyday walking shoes".to_string(),
        },
        Product {
            id: 3,
            name: "Basketball Elite".to_string(),
            price: 129.99,
            image_url: "https://example.com/images/shoes/basketball-elite.jpg".to_string(),
            category: "Sports".to_string(),
            description: "High-performance basketball shoes".to_string(),
        },
        Product {
            id: 4,
            name: "Hiking Extreme".to_string(),
            price: 149.99,
            image_url: "https://example.com/images/shoes/hiking-extreme.jpg".to_string(),
            category: "outdoor".to_string(),
            description: "Durable hiking boots for extreme conditions".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::test_product;

    #[test]
    fn test_sample_catalog_passes_validation() -> Result<()> {
        let catalog = Catalog::new(sample_products())?;
        assert_eq!(catalog.len(), 4);
        Ok(())
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::sample();

        let product = catalog.find_by_id(3).unwrap();
        assert_eq!(product.name, "Basketball Elite");
        assert_eq!(product.price, 129.99);

        assert!(catalog.find_by_id(999).is_none());
        assert!(catalog.find_by_id(-1).is_none());
    }

    #[test]
    fn test_filter_by_category_is_case_insensitive() {
        let catalog = Catalog::sample();

        // Stored category is "outdoor" (lowercase in the source data)
        let hits = catalog.filter_by_category("Outdoor");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);

        let hits = catalog.filter_by_category("RUNNING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        assert!(catalog.filter_by_category("sandals").is_empty());
    }

    #[test]
    fn test_filter_by_category_all_returns_full_catalog() {
        let catalog = Catalog::sample();

        let all = catalog.filter_by_category("all");
        assert_eq!(all.len(), catalog.len());
        // Order preserved
        let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        // The sentinel is itself case-insensitive
        assert_eq!(catalog.filter_by_category("ALL").len(), 4);
    }

    #[test]
    fn test_search_matches_category_or_description() {
        let catalog = Catalog::sample();

        // "running" appears in product 1's category and description only
        let hits = catalog.search("running");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        // "shoes" appears in every description except the hiking boots
        let hits = catalog.search("shoes");
        assert_eq!(hits.len(), 3);

        // Description-only match
        let hits = catalog.search("extreme conditions");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);

        // Case-insensitive
        assert_eq!(catalog.search("SPORTS").len(), 1);

        assert!(catalog.search("no such thing").is_empty());
    }

    #[test]
    fn test_search_empty_term_returns_everything() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.search("").len(), catalog.len());
    }

    #[test]
    fn test_new_rejects_non_positive_id() {
        let result = Catalog::new(vec![test_product(0, "Zero", 1.0)]);
        assert!(matches!(result.unwrap_err(), Error::Catalog { message: _ }));

        let result = Catalog::new(vec![test_product(-5, "Negative", 1.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            test_product(1, "First", 1.0),
            test_product(1, "Second", 2.0),
        ]);
        assert!(matches!(result.unwrap_err(), Error::Catalog { message: _ }));
    }

    #[test]
    fn test_new_rejects_bad_prices() {
        let result = Catalog::new(vec![test_product(1, "Negative", -10.0)]);
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidPrice { price: -10.0 }
        ));

        let result = Catalog::new(vec![test_product(1, "NaN", f64::NAN)]);
        assert!(matches!(result.unwrap_err(), Error::InvalidPrice { price: _ }));

        let result = Catalog::new(vec![test_product(1, "Inf", f64::INFINITY)]);
        assert!(matches!(result.unwrap_err(), Error::InvalidPrice { price: _ }));
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let result = Catalog::new(vec![test_product(1, "   ", 1.0)]);
        assert!(matches!(result.unwrap_err(), Error::Catalog { message: _ }));
    }

    #[test]
    fn test_empty_catalog_is_allowed() -> Result<()> {
        let catalog = Catalog::new(Vec::new())?;
        assert!(catalog.is_empty());
        assert!(catalog.filter_by_category("all").is_empty());
        Ok(())
    }
}

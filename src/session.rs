//! Session context - owns the catalog and cart for one shopping session.
//!
//! All input events from the front end (category selection, search terms,
//! cart commands keyed by product id, checkout) funnel through the session.
//! The cart is an explicit instance owned here rather than a module-level
//! global, so the front end holds exactly one handle to the whole shop
//! state and tests can spin up as many independent sessions as they like.

use crate::{
    cart::{Cart, CartDisplay, CartLine},
    catalog::{Catalog, Product},
    checkout::{self, CheckoutSummary},
    errors::{Error, Result},
};
use tracing::{debug, info};

/// Shared state for one shopping session.
pub struct Session {
    catalog: Catalog,
    cart: Cart,
}

impl Session {
    /// Creates a session over the given catalog with an empty cart.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        info!(product_count = catalog.len(), "Session started");
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    /// Attaches the cart display refreshed after every cart mutation.
    pub fn set_cart_display(&mut self, display: Box<dyn CartDisplay>) {
        self.cart.set_display(display);
    }

    /// The full catalog, for the initial product listing.
    #[must_use]
    pub fn browse(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Category-selection input event.
    #[must_use]
    pub fn select_category(&self, category: &str) -> Vec<&Product> {
        debug!(category, "Category selected");
        self.catalog.filter_by_category(category)
    }

    /// Free-text search input event.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Product> {
        debug!(term, "Search requested");
        self.catalog.search(term)
    }

    /// Add-to-cart command with the default quantity of 1.
    pub fn add_to_cart(&mut self, product_id: i64) {
        self.cart.add_item(&self.catalog, product_id);
    }

    /// Add-to-cart command with an explicit quantity.
    pub fn add_to_cart_with_quantity(&mut self, product_id: i64, quantity: u32) {
        self.cart
            .add_item_with_quantity(&self.catalog, product_id, quantity);
    }

    /// Remove-from-cart command.
    pub fn remove_from_cart(&mut self, product_id: i64) {
        self.cart.remove_item(product_id);
    }

    /// Set-quantity command; 0 removes the line.
    pub fn set_quantity(&mut self, product_id: i64, quantity: u32) {
        self.cart.update_quantity(product_id, quantity);
    }

    /// Current cart lines.
    #[must_use]
    pub fn cart_items(&self) -> &[CartLine] {
        self.cart.items()
    }

    /// Current cart total, computed fresh.
    #[must_use]
    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    /// Begins checkout, snapshotting the cart for confirmation.
    ///
    /// # Errors
    /// Returns [`Error::EmptyCart`] when there is nothing to purchase.
    pub fn checkout(&self) -> Result<CheckoutSummary> {
        if self.cart.is_empty() {
            return Err(Error::EmptyCart);
        }
        Ok(CheckoutSummary::from_cart(&self.cart))
    }

    /// Completes the purchase, returning the charged total and clearing
    /// the cart.
    ///
    /// # Errors
    /// Returns [`Error::EmptyCart`] when there is nothing to purchase.
    pub fn complete_purchase(&mut self) -> Result<f64> {
        if self.cart.is_empty() {
            return Err(Error::EmptyCart);
        }
        Ok(checkout::complete_purchase(&mut self.cart))
    }
}

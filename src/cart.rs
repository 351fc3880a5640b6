//! Shopping cart business logic - Handles all cart mutation and total operations.
//!
//! The cart is the one real state machine in the system: an ordered list of
//! (product, quantity) lines mutated through add/remove/update/clear, with
//! the total recomputed from scratch on every query. Every mutation is
//! followed synchronously by a display refresh so the rendering collaborator
//! never observes stale cart state. Unknown product ids and zero quantities
//! are absorbed as logged no-ops rather than surfaced as errors.

use crate::catalog::{Catalog, Product};
use tracing::{debug, warn};

/// Rendering seam for the cart.
///
/// Implementations receive the full line list and the fresh total after
/// every mutating operation. The cart never consumes anything back from the
/// display, so implementations are free to render however they like.
pub trait CartDisplay {
    /// Pushes the current cart contents to the rendering collaborator.
    fn refresh(&self, lines: &[CartLine], total: f64);
}

/// One distinct product's presence in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Snapshot of the catalog record (immutable, so a clone is equivalent
    /// to a shared reference)
    pub product: Product,
    /// Units of this product in the cart; always >= 1
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Mutable shopping cart for a single session.
///
/// Lines keep insertion order (order of first add) and there is at most one
/// line per product id; repeated adds merge by incrementing the quantity.
#[derive(Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    display: Option<Box<dyn CartDisplay>>,
}

impl Cart {
    /// Creates an empty cart with no display attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the display that will be refreshed after every mutation.
    pub fn set_display(&mut self, display: Box<dyn CartDisplay>) {
        self.display = Some(display);
    }

    /// Adds one unit of the given product to the cart.
    ///
    /// Equivalent to [`Cart::add_item_with_quantity`] with a quantity of 1,
    /// which is what the storefront's plain "add to cart" action sends.
    pub fn add_item(&mut self, catalog: &Catalog, product_id: i64) {
        self.add_item_with_quantity(catalog, product_id, 1);
    }

    /// Adds `quantity` units of the given product to the cart.
    ///
    /// The id is resolved against the catalog first; an id that does not
    /// resolve leaves the cart untouched (logged, not an error - the
    /// rendering layer only emits ids it just rendered, so an unknown id
    /// here is a bug upstream, not a user mistake). A zero quantity is
    /// likewise a no-op. If a line for this product already exists its
    /// quantity is incremented, otherwise a new line is appended.
    pub fn add_item_with_quantity(&mut self, catalog: &Catalog, product_id: i64, quantity: u32) {
        if quantity == 0 {
            warn!(product_id, "Ignoring add with zero quantity");
            return;
        }
        let Some(product) = catalog.find_by_id(product_id) else {
            warn!(product_id, "Ignoring add for unknown product id");
            return;
        };

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity += quantity;
            debug!(product_id, quantity = line.quantity, "Merged into existing cart line");
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            });
            debug!(product_id, quantity, "Appended new cart line");
        }
        self.refresh_display();
    }

    /// Removes the line for the given product, if present.
    pub fn remove_item(&mut self, product_id: i64) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        if self.lines.len() == before {
            debug!(product_id, "Remove requested for id not in cart");
        } else {
            debug!(product_id, "Removed cart line");
        }
        self.refresh_display();
    }

    /// Sets the quantity for the given product's line to an absolute value.
    ///
    /// A quantity of 0 removes the line entirely; a line is never retained
    /// with a non-positive quantity. If no line matches, nothing happens.
    pub fn update_quantity(&mut self, product_id: i64, quantity: u32) {
        if quantity == 0 {
            if self.lines.iter().any(|l| l.product.id == product_id) {
                self.remove_item(product_id);
            }
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
            debug!(product_id, quantity, "Updated cart line quantity");
            self.refresh_display();
        }
    }

    /// Computes the cart total, fresh on every call.
    ///
    /// Returns 0.0 for an empty cart. The total is never cached; the sum is
    /// always over the current lines.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        debug!("Cart cleared");
        self.refresh_display();
    }

    /// Current cart lines, in order of first add.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn refresh_display(&self) {
        if let Some(display) = &self.display {
            display.refresh(&self.lines, self.total());
        }
    }
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart")
            .field("lines", &self.lines)
            .field("has_display", &self.display.is_some())
            .finish()
    }
}

//! Checkout confirmation flow.
//!
//! Checkout is a trivial consumer of the cart: it snapshots the current
//! lines and total for the confirmation display, and on completion charges
//! nothing (there is no payment integration) and simply clears the cart.

use crate::cart::Cart;
use tracing::info;

/// One line of the checkout confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLine {
    /// Product display name
    pub name: String,
    /// Units being purchased
    pub quantity: u32,
    /// Unit price times quantity for this line
    pub line_total: f64,
}

/// Immutable snapshot of the cart taken when checkout begins.
///
/// The summary is detached from the cart on purpose: the confirmation view
/// renders from this snapshot, so later cart mutations cannot make the
/// displayed confirmation lie about what is being purchased.
#[derive(Debug, Clone)]
pub struct CheckoutSummary {
    /// Per-product confirmation lines, in cart order
    pub lines: Vec<CheckoutLine>,
    /// Grand total across all lines
    pub total: f64,
}

impl CheckoutSummary {
    /// Snapshots the given cart's contents for confirmation.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|l| CheckoutLine {
                name: l.product.name.clone(),
                quantity: l.quantity,
                line_total: l.line_total(),
            })
            .collect();
        Self {
            lines,
            total: cart.total(),
        }
    }
}

/// Completes the purchase: returns the charged total and empties the cart.
///
/// Clearing the cart triggers the usual display refresh, so the rendering
/// collaborator immediately shows an empty cart.
pub fn complete_purchase(cart: &mut Cart) -> f64 {
    let total = cart.total();
    info!(total, line_count = cart.len(), "Purchase completed");
    cart.clear();
    total
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::catalog::Catalog;
    use crate::test_utils::assert_money_eq;

    #[test]
    fn test_summary_snapshots_lines_and_total() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new();
        cart.add_item_with_quantity(&catalog, 1, 2);
        cart.add_item(&catalog, 4);

        let summary = CheckoutSummary::from_cart(&cart);

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].name, "Running Pro X1");
        assert_eq!(summary.lines[0].quantity, 2);
        assert_money_eq(summary.lines[0].line_total, 2.0 * 99.99);
        assert_eq!(summary.lines[1].name, "Hiking Extreme");
        assert_money_eq(summary.total, 2.0 * 99.99 + 149.99);
    }

    #[test]
    fn test_summary_is_detached_from_later_mutations() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new();
        cart.add_item(&catalog, 1);

        let summary = CheckoutSummary::from_cart(&cart);
        cart.clear();

        assert_eq!(summary.lines.len(), 1);
        assert_money_eq(summary.total, 99.99);
    }

    #[test]
    fn test_complete_purchase_returns_total_and_clears() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new();
        cart.add_item_with_quantity(&catalog, 3, 2);

        let charged = complete_purchase(&mut cart);

        assert_money_eq(charged, 259.98);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_summary_of_empty_cart() {
        let cart = Cart::new();
        let summary = CheckoutSummary::from_cart(&cart);
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total, 0.0);
    }
}

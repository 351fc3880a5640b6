//! Terminal rendering collaborator.
//!
//! Pure formatting functions build the product listing, cart view, and
//! checkout confirmation as strings; [`TerminalDisplay`] implements the
//! cart's refresh seam by printing the cart view after every mutation.
//! Nothing here feeds back into the core - rendering is strictly a
//! consumer.

use crate::{
    cart::{CartDisplay, CartLine},
    catalog::Product,
    checkout::CheckoutSummary,
};
use std::fmt::Write as _;

/// Formats a product listing, one block per product.
#[must_use]
pub fn format_product_list(products: &[&Product], currency: &str) -> String {
    if products.is_empty() {
        return "No products match.\n".to_string();
    }
    let mut out = String::new();
    for product in products {
        let _ = writeln!(
            out,
            "[{}] {} - {}{:.2}\n    {} | {}",
            product.id, product.name, currency, product.price, product.category,
            product.description
        );
    }
    out
}

/// Formats the cart view: one line per cart line plus the running total.
#[must_use]
pub fn format_cart(lines: &[CartLine], total: f64, currency: &str) -> String {
    let mut out = String::new();
    if lines.is_empty() {
        out.push_str("Cart is empty.\n");
    } else {
        for line in lines {
            let _ = writeln!(
                out,
                "[{}] {} x{} @ {}{:.2} = {}{:.2}",
                line.product.id,
                line.product.name,
                line.quantity,
                currency,
                line.product.price,
                currency,
                line.line_total()
            );
        }
    }
    let _ = writeln!(out, "Total: {currency}{total:.2}");
    out
}

/// Formats the checkout confirmation from a summary snapshot.
#[must_use]
pub fn format_checkout(summary: &CheckoutSummary, currency: &str) -> String {
    let mut out = String::from("--- Checkout ---\n");
    for line in &summary.lines {
        let _ = writeln!(
            out,
            "{} (x{})  {}{:.2}",
            line.name, line.quantity, currency, line.line_total
        );
    }
    let _ = writeln!(out, "Total: {currency}{:.2}", summary.total);
    out
}

/// Cart display that prints the cart view to stdout on every refresh.
#[derive(Debug, Clone)]
pub struct TerminalDisplay {
    currency: String,
}

impl TerminalDisplay {
    /// Creates a terminal display using the given currency symbol.
    #[must_use]
    pub fn new(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
        }
    }
}

impl CartDisplay for TerminalDisplay {
    fn refresh(&self, lines: &[CartLine], total: f64) {
        print!("{}", format_cart(lines, total, &self.currency));
    }
}

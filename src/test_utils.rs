//! Shared test utilities for `Shopfront`.
//!
//! This module provides common helpers for building test catalogs,
//! recording display refreshes, and comparing money values.

use crate::cart::{CartDisplay, CartLine};
use crate::catalog::Product;
use std::cell::RefCell;
use std::rc::Rc;

/// Builds a minimal product with sensible defaults for the remaining fields.
#[must_use]
pub fn test_product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        image_url: format!("https://example.com/images/{id}.jpg"),
        category: "Test".to_string(),
        description: format!("{name} test product"),
    }
}

/// Refresh observations as `(vec of (product id, quantity), total)` pairs.
pub type Refreshes = Rc<RefCell<Vec<(Vec<(i64, u32)>, f64)>>>;

/// Cart display that records every refresh it receives.
///
/// Used to assert that mutations push fresh state to the rendering
/// collaborator, and that rejected operations do not.
pub struct RecordingDisplay {
    refreshes: Refreshes,
}

impl RecordingDisplay {
    /// Creates a recording display plus a shared handle to its log.
    #[must_use]
    pub fn new() -> (Self, Refreshes) {
        let refreshes: Refreshes = Rc::new(RefCell::new(Vec::new()));
        let display = Self {
            refreshes: Rc::clone(&refreshes),
        };
        (display, refreshes)
    }
}

impl CartDisplay for RecordingDisplay {
    fn refresh(&self, lines: &[CartLine], total: f64) {
        let snapshot = lines
            .iter()
            .map(|l| (l.product.id, l.quantity))
            .collect();
        self.refreshes.borrow_mut().push((snapshot, total));
    }
}

/// Asserts two money amounts are equal within floating-point tolerance.
///
/// Prices like 99.99 are not exactly representable in binary floating
/// point, so scenario totals need an epsilon comparison.
pub fn assert_money_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

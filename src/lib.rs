//! `Shopfront` - A catalog browser and shopping cart for a small, fixed product list
//!
//! This crate provides an in-memory storefront: a static product catalog with
//! category filtering and free-text search, a shopping cart with quantity
//! tracking and total computation, and a checkout confirmation flow. There is
//! no persistence and no payment processing; completing a purchase clears the
//! cart.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Documentation - missing docs should be added gradually
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Shopping cart state machine - lines, totals, and the display refresh seam
pub mod cart;
/// Static product catalog - lookup, category filtering, and search
pub mod catalog;
/// Checkout confirmation flow - summaries and purchase completion
pub mod checkout;
/// Configuration management for catalog files and display settings
pub mod config;
/// Terminal rendering collaborator for catalog, cart, and checkout views
pub mod display;
/// Unified error types and result handling
pub mod errors;
/// Session context owning the catalog and cart for one shopping session
pub mod session;

#[cfg(test)]
pub mod test_utils;

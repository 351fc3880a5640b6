use thiserror::Error;

/// Unified error type for the shopfront crate.
///
/// The cart core itself never surfaces errors (unknown ids and zero
/// quantities are absorbed as no-ops); these variants cover the
/// configuration, catalog-loading, and checkout boundaries.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Catalog data failed startup validation
    #[error("Invalid catalog: {message}")]
    Catalog {
        /// Description of the offending record
        message: String,
    },

    /// A product price was negative or not finite
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected price value
        price: f64,
    },

    /// Checkout was requested for a cart with no lines
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// I/O error from the terminal or filesystem
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

//! Catalog and settings configuration.
//!
//! The product catalog can be supplied as a TOML file of `[[products]]`
//! tables; when no file is configured the built-in sample catalog is used
//! so the storefront works out of the box. Display settings are read from
//! environment variables (loaded from `.env` by the binary) and fall back
//! to sensible defaults when unset.

use crate::{
    catalog::{Catalog, Product},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Structure of a catalog TOML file: a list of `[[products]]` tables.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Product records in catalog order
    pub products: Vec<Product>,
}

/// Loads and validates a catalog from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or required fields are missing
/// - Any record fails [`Catalog::new`] validation
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path_ref = path.as_ref();
    debug!("Attempting to load catalog from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {path_ref:?}: {e}"),
    })?;

    let file: CatalogFile = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog file {path_ref:?}: {e}"),
    })?;

    Catalog::new(file.products)
}

/// Loads the catalog from the given path, or the built-in sample catalog
/// when no path is configured.
///
/// # Errors
/// Returns an error if a path was given but loading it fails; a missing
/// configuration is not an error.
pub fn load_catalog_or_sample(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => {
            let catalog = load_catalog(p)?;
            info!(path = ?p, product_count = catalog.len(), "Loaded catalog from file");
            Ok(catalog)
        }
        None => {
            info!("No catalog file configured, using built-in sample catalog");
            Ok(Catalog::sample())
        }
    }
}

/// Display and startup settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Optional path to a catalog TOML file (`SHOPFRONT_CATALOG`)
    pub catalog_path: Option<PathBuf>,
    /// Currency symbol used by the terminal display (`SHOPFRONT_CURRENCY`)
    pub currency: String,
}

impl Settings {
    /// Reads settings from environment variables, applying defaults for
    /// anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let catalog_path = std::env::var("SHOPFRONT_CATALOG").ok().map(PathBuf::from);
        let currency = std::env::var("SHOPFRONT_CURRENCY").unwrap_or_else(|_| "$".to_string());
        Self {
            catalog_path,
            currency,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            currency: "$".to_string(),
        }
    }
}

//! Edges of the storefront: catalog file formats and the HTTP surface.

pub mod csv;
pub mod http;
pub mod json;

use crate::domain::product::Product;
use crate::error::{Result, StorefrontError};
use std::fs::File;
use std::path::Path;

/// Loads the static product dataset, picking the format from the extension.
///
/// The whole file must parse; a single bad record fails the load.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => json::product_reader::read_products(File::open(path)?),
        Some("csv") => csv::product_reader::ProductReader::new(File::open(path)?)
            .products()
            .collect(),
        _ => Err(StorefrontError::CatalogError(format!(
            "Unsupported catalog format: {}",
            path.display()
        ))),
    }
}

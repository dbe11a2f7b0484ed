use crate::domain::ports::ProductCatalog;
use crate::domain::product::{Product, ProductId};
use crate::error::{Result, StorefrontError};
use std::collections::HashMap;
use std::sync::Arc;

/// An immutable in-memory product catalog.
///
/// Built once from the static dataset and shared behind `Arc`; lookups take no
/// locks. Listing preserves the order of the source file.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Arc<[Product]>,
    index: Arc<HashMap<ProductId, usize>>,
}

impl InMemoryCatalog {
    /// Creates a catalog, rejecting duplicate product ids.
    ///
    /// Blank image references are replaced by the placeholder image.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(StorefrontError::CatalogError(format!(
                    "Duplicate product id {}",
                    product.id
                )));
            }
        }

        let products: Vec<Product> = products
            .into_iter()
            .map(Product::with_image_fallback)
            .collect();

        Ok(Self {
            products: products.into(),
            index: Arc::new(index),
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{PLACEHOLDER_IMAGE, Price};
    use rust_decimal_macros::dec;

    fn product(id: ProductId, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: Price::new(dec!(25)).unwrap(),
            image: String::new(),
            description: String::new(),
            category: "accessories".to_string(),
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog =
            InMemoryCatalog::new(vec![product(3, "Cap"), product(1, "Tote")]).unwrap();

        assert_eq!(catalog.get(1).unwrap().name, "Tote");
        assert_eq!(catalog.get(3).unwrap().name, "Cap");
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_listing_keeps_source_order() {
        let catalog =
            InMemoryCatalog::new(vec![product(3, "Cap"), product(1, "Tote")]).unwrap();
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cap", "Tote"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = InMemoryCatalog::new(vec![product(1, "Cap"), product(1, "Tote")]);
        assert!(matches!(result, Err(StorefrontError::CatalogError(_))));
    }

    #[test]
    fn test_placeholder_applied_on_load() {
        let catalog = InMemoryCatalog::new(vec![product(1, "Cap")]).unwrap();
        assert_eq!(catalog.get(1).unwrap().image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = InMemoryCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get(1).is_none());
    }
}

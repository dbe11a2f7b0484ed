use crate::domain::product::Product;
use crate::error::Result;
use std::io::{BufReader, Read};

/// Reads a catalog stored as a JSON array of product objects.
pub fn read_products<R: Read>(source: R) -> Result<Vec<Product>> {
    Ok(serde_json::from_reader(BufReader::new(source))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_products() {
        let data = r#"[
            {"id": 1, "name": "Logo Tee", "price": 40, "image": "/tee.jpg",
             "description": "Heavyweight cotton", "category": "tops"},
            {"id": 2, "name": "Canvas Tote", "price": 18.5, "category": "accessories"}
        ]"#;
        let products = read_products(data.as_bytes()).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price.value(), dec!(40));
        assert_eq!(products[1].price.value(), dec!(18.5));
        assert!(products[1].description.is_empty());
    }

    #[test]
    fn test_read_products_rejects_negative_price() {
        let data = r#"[{"id": 1, "name": "Refund", "price": -3}]"#;
        assert!(matches!(
            read_products(data.as_bytes()),
            Err(StorefrontError::JsonError(_))
        ));
    }
}

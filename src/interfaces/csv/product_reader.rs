use crate::domain::product::Product;
use crate::error::{Result, StorefrontError};
use std::io::Read;

/// Reads catalog records from a CSV source.
///
/// Expects the header `id,name,price,image,description,category`. Whitespace
/// around fields is trimmed; `image`, `description` and `category` may be empty.
pub struct ProductReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ProductReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily deserializes products.
    pub fn products(self) -> impl Iterator<Item = Result<Product>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(StorefrontError::from))
    }
}

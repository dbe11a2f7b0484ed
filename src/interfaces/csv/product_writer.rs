use crate::domain::product::Product;
use crate::error::Result;
use std::io::Write;

/// Writes a catalog listing as CSV (`id,name,price,category`).
pub struct ProductWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ProductWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_products<'a>(
        &mut self,
        products: impl IntoIterator<Item = &'a Product>,
    ) -> Result<()> {
        self.writer.write_record(["id", "name", "price", "category"])?;
        for product in products {
            self.writer.write_record([
                product.id.to_string(),
                product.name.clone(),
                product.price.to_string(),
                product.category.clone(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

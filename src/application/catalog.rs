//! Product catalog.

use std::sync::Arc;

use tracing::info;

use super::records::RecordStore;
use crate::domain::{NewProduct, Product, ProductId, ProductPatch};
use crate::error::{Error, Result};
use crate::port::Clock;

/// Category filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// CRUD over `products.json`.
#[derive(Clone)]
pub struct Catalog {
    records: RecordStore,
    clock: Arc<dyn Clock>,
}

impl Catalog {
    pub fn new(records: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self { records, clock }
    }

    /// Every product, or those of one category. `"all"` disables the filter.
    pub fn list(&self, category: Option<&str>) -> Vec<Product> {
        let products = self.records.products();
        match category {
            Some(category) if category != ALL_CATEGORIES => products
                .into_iter()
                .filter(|product| product.category == category)
                .collect(),
            _ => products,
        }
    }

    pub fn get(&self, id: &ProductId) -> Result<Product> {
        self.records
            .products()
            .into_iter()
            .find(|product| &product.id == id)
            .ok_or_else(|| Error::product_not_found(id))
    }

    pub fn add(&self, new: NewProduct) -> Result<Product> {
        let product = Product::create(new, ProductId::generate(), self.clock.now())?;
        let mut products = self.records.products();
        products.push(product.clone());
        self.records.save_products(&products)?;
        info!(product_id = %product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Merge `patch` into an existing product.
    pub fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<Product> {
        let mut products = self.records.products();
        let slot = products
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or_else(|| Error::product_not_found(id))?;
        let updated = slot.patched(patch)?;
        *slot = updated.clone();
        self.records.save_products(&products)?;
        info!(product_id = %id, "Product updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &ProductId) -> Result<Product> {
        let mut products = self.records.products();
        let index = products
            .iter()
            .position(|product| &product.id == id)
            .ok_or_else(|| Error::product_not_found(id))?;
        let removed = products.remove(index);
        self.records.save_products(&products)?;
        info!(product_id = %id, "Product deleted");
        Ok(removed)
    }
}

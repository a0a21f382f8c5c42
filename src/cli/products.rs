//! `products` commands.

use std::path::Path;

use tabled::Tabled;

use crate::application::Storefront;
use crate::cli::{money, output, read_json};
use crate::domain::{NewProduct, Product, ProductId, ProductPatch};
use crate::error::Result;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Stock")]
    stock: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: money(product.price),
            discount: product
                .discount_percent()
                .map(|percent| format!("{percent}%"))
                .unwrap_or_default(),
            stock: if product.in_stock {
                product.stock.to_string()
            } else {
                "out".to_string()
            },
        }
    }
}

pub fn list(shop: &Storefront, category: Option<&str>) -> Result<()> {
    let products = shop.catalog().list(category);
    if output::is_json() {
        return output::json_output(&products);
    }

    output::section("Products");
    output::table(products.iter().map(ProductRow::from).collect(), "No products");
    Ok(())
}

pub fn show(shop: &Storefront, id: &str) -> Result<()> {
    let product = shop.catalog().get(&ProductId::new(id))?;
    if output::is_json() {
        return output::json_output(&product);
    }

    output::section(&product.name);
    output::field("ID", &product.id);
    if let Some(name_en) = &product.name_en {
        output::field("English name", name_en);
    }
    output::field("Category", &product.category);
    output::field("Price", output::highlight(money(product.price)));
    if let Some(old_price) = product.old_price {
        output::field("Old price", output::muted(money(old_price)));
    }
    if let Some(percent) = product.discount_percent() {
        output::field("Discount", format!("{percent}%"));
    }
    output::field("In stock", product.in_stock);
    output::field("Stock", product.stock);
    output::field("Rating", format!("{:.1} ({} reviews)", product.rating, product.reviews));
    if !product.description.is_empty() {
        output::field("Description", &product.description);
    }
    Ok(())
}

pub fn add(shop: &Storefront, file: &Path) -> Result<()> {
    let new: NewProduct = read_json(file)?;
    let product = shop.catalog().add(new)?;
    if output::is_json() {
        return output::json_output(&product);
    }
    output::success(&format!(
        "Product {} added as {}",
        product.name,
        output::highlight(&product.id)
    ));
    Ok(())
}

pub fn update(shop: &Storefront, id: &str, file: &Path) -> Result<()> {
    let patch: ProductPatch = read_json(file)?;
    let product = shop.catalog().update(&ProductId::new(id), patch)?;
    if output::is_json() {
        return output::json_output(&product);
    }
    output::success(&format!("Product {} updated", output::highlight(&product.id)));
    Ok(())
}

pub fn delete(shop: &Storefront, id: &str) -> Result<()> {
    let product = shop.catalog().delete(&ProductId::new(id))?;
    if output::is_json() {
        return output::json_output(&product);
    }
    output::success(&format!("Product {} deleted", product.name));
    Ok(())
}

//! Catalog products.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{collect, DomainError, FieldError};
use super::ids::ProductId;
use super::money::Money;

fn default_in_stock() -> bool {
    true
}

/// A product listed in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Money>,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Validate `new` and stamp it with an id and creation time.
    pub fn create(new: NewProduct, id: ProductId, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let product = Self {
            id,
            name: new.name.trim().to_string(),
            name_en: new.name_en,
            price: new.price,
            old_price: new.old_price,
            category: new.category.trim().to_string(),
            image: new.image,
            description: new.description,
            in_stock: new.in_stock.unwrap_or(true),
            stock: new.stock,
            rating: new.rating,
            reviews: new.reviews,
            created_at: now,
        };
        product.validate()?;
        Ok(product)
    }

    /// Check the catalog invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Product name is required"));
        }
        if self.price <= Decimal::ZERO {
            errors.push(FieldError::new("price", "Product price must be greater than 0"));
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "Product category is required"));
        }
        collect(errors)
    }

    /// Merge `patch` into a copy of this product and validate the result.
    pub fn patched(&self, patch: ProductPatch) -> Result<Self, DomainError> {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(name_en) = patch.name_en {
            next.name_en = Some(name_en);
        }
        if let Some(price) = patch.price {
            next.price = price;
        }
        if let Some(old_price) = patch.old_price {
            next.old_price = Some(old_price);
        }
        if let Some(category) = patch.category {
            next.category = category;
        }
        if let Some(image) = patch.image {
            next.image = image;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if let Some(in_stock) = patch.in_stock {
            next.in_stock = in_stock;
        }
        if let Some(stock) = patch.stock {
            next.stock = stock;
        }
        if let Some(rating) = patch.rating {
            next.rating = rating;
        }
        if let Some(reviews) = patch.reviews {
            next.reviews = reviews;
        }
        next.validate()?;
        Ok(next)
    }

    /// Percentage off the old price, rounded to a whole number.
    #[must_use]
    pub fn discount_percent(&self) -> Option<Decimal> {
        let old = self.old_price.filter(|old| !old.is_zero())?;
        let ratio = old.checked_sub(self.price)?.checked_div(old)?;
        Some(ratio.checked_mul(Decimal::ONE_HUNDRED)?.round())
    }
}

/// Payload for adding a product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub price: Money,
    #[serde(default)]
    pub old_price: Option<Money>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
}

/// Partial update for a product. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub price: Option<Money>,
    pub old_price: Option<Money>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub in_stock: Option<bool>,
    pub stock: Option<u32>,
    pub rating: Option<f32>,
    pub reviews: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn paracetamol() -> NewProduct {
        NewProduct {
            name: "Paracetamol 500mg".into(),
            price: dec!(35),
            old_price: Some(dec!(50)),
            category: "painkillers".into(),
            stock: 40,
            ..NewProduct::default()
        }
    }

    #[test]
    fn create_defaults_to_in_stock() {
        let product = Product::create(paracetamol(), ProductId::new("p-1"), Utc::now()).unwrap();
        assert!(product.in_stock);
        assert_eq!(product.stock, 40);
    }

    #[test]
    fn create_rejects_missing_fields() {
        let err = Product::create(NewProduct::default(), ProductId::new("p-1"), Utc::now())
            .unwrap_err();
        let fields: Vec<_> = err.fields().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "price", "category"]);
    }

    #[test]
    fn patch_is_validated_after_merge() {
        let product = Product::create(paracetamol(), ProductId::new("p-1"), Utc::now()).unwrap();

        let cheaper = product
            .patched(ProductPatch {
                price: Some(dec!(30)),
                ..ProductPatch::default()
            })
            .unwrap();
        assert_eq!(cheaper.price, dec!(30));
        assert_eq!(cheaper.name, product.name);

        let invalid = product.patched(ProductPatch {
            price: Some(dec!(0)),
            ..ProductPatch::default()
        });
        assert!(invalid.is_err());
    }

    #[test]
    fn discount_is_rounded_percentage() {
        let product = Product::create(paracetamol(), ProductId::new("p-1"), Utc::now()).unwrap();
        assert_eq!(product.discount_percent(), Some(dec!(30)));

        let mut plain = product.clone();
        plain.old_price = None;
        assert_eq!(plain.discount_percent(), None);
    }
}

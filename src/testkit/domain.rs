//! Builders for domain payloads used across tests.

use rust_decimal::Decimal;

use crate::domain::{NewOrder, NewProduct, OrderItem};

/// One cart line.
pub fn item(id: &str, price: Decimal, quantity: u32) -> OrderItem {
    OrderItem::new(id, format!("Product {id}"), price, quantity)
}

/// A valid checkout with the given lines.
pub fn checkout(items: Vec<OrderItem>) -> NewOrder {
    NewOrder {
        customer_name: "Mona Adel".into(),
        phone: "01012345678".into(),
        address: "12 Tahrir Street, Cairo".into(),
        details: String::new(),
        items,
        client_total: None,
    }
}

/// A valid checkout of a single unit at `total`.
pub fn checkout_of(total: Decimal) -> NewOrder {
    checkout(vec![item("p-1", total, 1)])
}

/// A valid product payload.
pub fn product(name: &str, category: &str, price: Decimal) -> NewProduct {
    NewProduct {
        name: name.into(),
        price,
        category: category.into(),
        stock: 10,
        ..NewProduct::default()
    }
}

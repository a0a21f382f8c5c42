//! `orders` commands.

use std::path::Path;

use tabled::Tabled;

use crate::application::Storefront;
use crate::cli::{money, output, read_json};
use crate::domain::{NewOrder, Order, OrderId};
use crate::error::Result;

#[derive(Tabled)]
pub(crate) struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Items")]
    items: u64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Placed")]
    placed: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            customer: order.customer_name.clone(),
            total: money(order.total_amount),
            items: order.unit_count(),
            status: order.status.to_string(),
            placed: order.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Line")]
    line: String,
}

pub fn list(shop: &Storefront) -> Result<()> {
    let orders = shop.orders();
    if output::is_json() {
        return output::json_output(&orders);
    }

    output::section("Orders");
    output::table(orders.iter().map(OrderRow::from).collect(), "No orders yet");
    Ok(())
}

pub fn show(shop: &Storefront, id: &str) -> Result<()> {
    let order = shop.order(&OrderId::new(id))?;
    if output::is_json() {
        return output::json_output(&order);
    }
    print_order(&order);
    Ok(())
}

pub fn create(shop: &Storefront, file: &Path) -> Result<()> {
    let new: NewOrder = read_json(file)?;
    let order = shop.create_order(new)?;
    if output::is_json() {
        return output::json_output(&order);
    }

    output::success(&format!(
        "Order {} placed ({})",
        output::highlight(&order.id),
        money(order.total_amount)
    ));
    Ok(())
}

pub fn status(shop: &Storefront, id: &str, status: &str) -> Result<()> {
    let change = shop.update_order_status(&OrderId::new(id), status)?;
    if output::is_json() {
        return output::json_output(&change.order);
    }

    output::success(&format!(
        "Order {} {} → {}",
        output::highlight(&change.order.id),
        change.previous,
        change.order.status
    ));
    Ok(())
}

pub fn delete(shop: &Storefront, id: &str) -> Result<()> {
    let order = shop.delete_order(&OrderId::new(id))?;
    if output::is_json() {
        return output::json_output(&order);
    }
    output::success(&format!("Order {} deleted", output::highlight(&order.id)));
    Ok(())
}

fn print_order(order: &Order) {
    output::section(&format!("Order {}", order.id));
    output::field("Customer", &order.customer_name);
    output::field("Phone", &order.phone);
    output::field("Address", &order.address);
    if !order.details.is_empty() {
        output::field("Details", &order.details);
    }
    output::field("Status", &order.status);
    output::field("Placed", order.created_at.to_rfc3339());
    if let Some(updated) = order.updated_at {
        output::field("Updated", updated.to_rfc3339());
    }
    output::field("Total", output::highlight(money(order.total_amount)));

    output::section("Items");
    let rows = order
        .items
        .iter()
        .map(|item| ItemRow {
            name: item.name.clone(),
            price: money(item.price),
            quantity: item.quantity,
            line: money(item.line_total()),
        })
        .collect();
    output::table(rows, "No items");
}

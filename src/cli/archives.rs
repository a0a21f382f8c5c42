//! `archives` commands.

use tabled::Tabled;

use crate::application::Storefront;
use crate::cli::orders::OrderRow;
use crate::cli::{money, output};
use crate::domain::MonthKey;
use crate::error::Result;

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Sales")]
    sales: String,
    #[tabled(rename = "Orders")]
    orders: u64,
    #[tabled(rename = "Archived")]
    archived_at: String,
    #[tabled(rename = "Manual")]
    manual: &'static str,
}

#[derive(Tabled)]
struct MonthlyRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Sales")]
    sales: String,
    #[tabled(rename = "Orders")]
    orders: u64,
    #[tabled(rename = "Rotated")]
    rotated: usize,
    #[tabled(rename = "Archived")]
    archived_at: String,
    #[tabled(rename = "Manual")]
    manual: &'static str,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        ""
    }
}

pub fn daily(shop: &Storefront) -> Result<()> {
    let records = shop.daily_archives();
    if output::is_json() {
        return output::json_output(&records);
    }

    output::section("Daily archives");
    let rows = records
        .iter()
        .map(|record| DailyRow {
            date: record.date.to_string(),
            sales: money(record.daily_sales),
            orders: record.daily_orders,
            archived_at: record.archived_at.format("%Y-%m-%d %H:%M").to_string(),
            manual: yes_no(record.manual_trigger),
        })
        .collect();
    output::table(rows, "No daily archives yet");
    Ok(())
}

pub fn monthly(shop: &Storefront) -> Result<()> {
    let records = shop.monthly_archives();
    if output::is_json() {
        return output::json_output(&records);
    }

    output::section("Monthly archives");
    let rows = records
        .iter()
        .map(|record| MonthlyRow {
            month: record.id.to_string(),
            sales: money(record.monthly_sales),
            orders: record.monthly_orders,
            rotated: record.orders_count,
            archived_at: record.archived_at.format("%Y-%m-%d %H:%M").to_string(),
            manual: yes_no(record.manual_trigger),
        })
        .collect();
    output::table(rows, "No monthly archives yet");
    Ok(())
}

pub fn months(shop: &Storefront) -> Result<()> {
    let months: Vec<String> = shop
        .archived_months()?
        .into_iter()
        .map(|month| month.to_string())
        .collect();
    if output::is_json() {
        return output::json_output(&months);
    }

    output::section("Archived order months");
    if months.is_empty() {
        output::note("No archived orders yet");
    }
    for month in months {
        println!("  {month}");
    }
    Ok(())
}

pub fn orders(shop: &Storefront, month: &str) -> Result<()> {
    let period: MonthKey = month.parse()?;
    let orders = shop.archived_orders(period);
    if output::is_json() {
        return output::json_output(&orders);
    }

    output::section(&format!("Orders archived for {period}"));
    let rows = orders.iter().map(OrderRow::from).collect();
    output::table(rows, "No orders archived for this month");
    Ok(())
}

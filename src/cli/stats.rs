//! `stats` command.

use crate::application::Storefront;
use crate::cli::{money, output};
use crate::error::Result;

pub fn show(shop: &Storefront) -> Result<()> {
    let stats = shop.stats()?;
    if output::is_json() {
        return output::json_output(&stats);
    }

    output::section("Today");
    output::field("Sales", output::highlight(money(stats.daily_sales)));
    output::field("Orders", stats.daily_orders);
    output::field("Day", stats.last_updated);

    output::section("This month");
    output::field("Sales", output::highlight(money(stats.monthly_sales)));
    output::field("Orders", stats.monthly_orders);
    if let Some(period) = stats.last_monthly_reset {
        output::field("Rolled over", period);
    }
    Ok(())
}

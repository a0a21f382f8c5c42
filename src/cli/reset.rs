//! `reset` command: manual archive trigger.

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::application::Storefront;
use crate::cli::{money, output};
use crate::error::Result;

pub fn execute(shop: &Storefront, yes: bool) -> Result<()> {
    if !yes {
        output::warning("This archives the current counters and empties the live orders.");
        let confirm = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Archive and reset now?")
            .default(false)
            .interact()?;
        if !confirm {
            output::note("Aborted.");
            return Ok(());
        }
    }

    let reset = shop.manual_reset()?;
    if output::is_json() {
        return output::json_output(&reset);
    }

    output::success(&format!(
        "Archived {} ({} orders, {})",
        reset.monthly.id,
        reset.monthly.orders_count,
        money(reset.monthly.monthly_sales)
    ));
    match &reset.daily {
        Some(daily) => output::success(&format!(
            "Archived day {} ({} orders, {})",
            daily.date,
            daily.daily_orders,
            money(daily.daily_sales)
        )),
        None => output::note("No daily activity to archive"),
    }
    output::success("Counters reset");
    Ok(())
}

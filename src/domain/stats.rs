//! Running sales counters.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::archive::MonthKey;
use super::money::{saturating_sub, Money};

/// Daily and monthly sales counters.
///
/// A single snapshot is persisted and mutated in place. `last_updated` is the
/// calendar day the daily counters belong to. Counters never go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub daily_sales: Money,
    pub monthly_sales: Money,
    pub daily_orders: u64,
    pub monthly_orders: u64,
    pub last_updated: NaiveDate,
    /// Month whose first-day rollover already ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_monthly_reset: Option<MonthKey>,
}

impl StatsSnapshot {
    /// Zeroed counters for `today`.
    #[must_use]
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            daily_sales: Decimal::ZERO,
            monthly_sales: Decimal::ZERO,
            daily_orders: 0,
            monthly_orders: 0,
            last_updated: today,
            last_monthly_reset: None,
        }
    }

    /// Clamp any negative amount read from disk back to zero.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.daily_sales = self.daily_sales.max(Decimal::ZERO);
        self.monthly_sales = self.monthly_sales.max(Decimal::ZERO);
        self
    }

    /// True when the daily counters hold anything worth archiving.
    #[must_use]
    pub fn has_daily_activity(&self) -> bool {
        self.daily_sales > Decimal::ZERO || self.daily_orders > 0
    }

    /// Credit one order to both periods. Amounts saturate at [`Decimal::MAX`].
    pub fn record_sale(&mut self, amount: Money) {
        self.daily_sales = self.daily_sales.saturating_add(amount);
        self.monthly_sales = self.monthly_sales.saturating_add(amount);
        self.daily_orders = self.daily_orders.saturating_add(1);
        self.monthly_orders = self.monthly_orders.saturating_add(1);
    }

    /// Take one order back out.
    ///
    /// The monthly counters are always debited; the daily counters only when
    /// the order belongs to the current day.
    pub fn reverse_sale(&mut self, amount: Money, placed_today: bool) {
        if placed_today {
            self.daily_sales = saturating_sub(self.daily_sales, amount);
            self.daily_orders = self.daily_orders.saturating_sub(1);
        }
        self.monthly_sales = saturating_sub(self.monthly_sales, amount);
        self.monthly_orders = self.monthly_orders.saturating_sub(1);
    }

    /// Zero the daily counters and move them to `today`.
    pub fn reset_daily(&mut self, today: NaiveDate) {
        self.daily_sales = Decimal::ZERO;
        self.daily_orders = 0;
        self.last_updated = today;
    }

    /// Zero the monthly counters.
    pub fn reset_monthly(&mut self) {
        self.monthly_sales = Decimal::ZERO;
        self.monthly_orders = 0;
    }
}

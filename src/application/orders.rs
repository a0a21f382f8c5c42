//! Order lifecycle: placement, status changes, lookup.

use std::sync::Arc;

use tracing::{debug, info};

use super::records::RecordStore;
use super::rollover::RolloverReport;
use super::stats::StatsCounter;
use crate::domain::{NewOrder, Order, OrderId, OrderStatus};
use crate::error::{Error, Result};
use crate::port::Clock;

/// An order that was just stored, and what its stats update archived.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: Order,
    pub rollover: RolloverReport,
}

/// Outcome of a status change.
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub order: Order,
    pub previous: OrderStatus,
    pub rollover: RolloverReport,
}

/// The live order collection.
#[derive(Clone)]
pub struct OrderBook {
    records: RecordStore,
    stats: StatsCounter,
    clock: Arc<dyn Clock>,
}

impl OrderBook {
    pub fn new(records: RecordStore, stats: StatsCounter, clock: Arc<dyn Clock>) -> Self {
        Self {
            records,
            stats,
            clock,
        }
    }

    /// Validate and store a new pending order, then credit it to the counters.
    ///
    /// Ended periods are rolled over before the order is appended, so an
    /// order placed on the first of a month stays in the new month's
    /// collection.
    pub fn create(&self, new: NewOrder) -> Result<PlacedOrder> {
        let order = Order::place(new, OrderId::generate(), self.clock.now())?;

        let (_, mut rollover) = self.stats.roll_over()?;

        let mut orders = self.records.orders();
        orders.push(order.clone());
        self.records.save_orders(&orders)?;

        let late = self.stats.apply_order_created(&order)?;
        merge(&mut rollover, late);

        info!(
            order_id = %order.id,
            total = %order.total_amount,
            items = order.items.len(),
            "Order created"
        );
        Ok(PlacedOrder { order, rollover })
    }

    /// Parse `status` and apply it to the order.
    pub fn update_status(&self, id: &OrderId, status: &str) -> Result<StatusChange> {
        let next: OrderStatus = status.parse()?;
        self.set_status(id, next)
    }

    /// Move an order to `next`.
    ///
    /// Entering `cancelled` takes the order back out of the counters. An
    /// order that is already cancelled is never debited twice.
    pub fn set_status(&self, id: &OrderId, next: OrderStatus) -> Result<StatusChange> {
        let mut orders = self.records.orders();
        let order = orders
            .iter_mut()
            .find(|order| &order.id == id)
            .ok_or_else(|| Error::order_not_found(id))?;

        let previous = order.transition(next, self.clock.now())?;
        let order = order.clone();
        self.records.save_orders(&orders)?;

        let rollover = if next == OrderStatus::Cancelled && previous != OrderStatus::Cancelled {
            self.stats.apply_order_cancelled(&order)?
        } else {
            RolloverReport::default()
        };

        debug!(order_id = %id, from = %previous, to = %next, "Order status updated");
        Ok(StatusChange {
            order,
            previous,
            rollover,
        })
    }

    pub fn get(&self, id: &OrderId) -> Result<Order> {
        self.records
            .orders()
            .into_iter()
            .find(|order| &order.id == id)
            .ok_or_else(|| Error::order_not_found(id))
    }

    /// Live orders, newest first.
    pub fn list(&self) -> Vec<Order> {
        let mut orders = self.records.orders();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Remove an order without touching the counters.
    pub fn delete(&self, id: &OrderId) -> Result<Order> {
        let mut orders = self.records.orders();
        let index = orders
            .iter()
            .position(|order| &order.id == id)
            .ok_or_else(|| Error::order_not_found(id))?;
        let removed = orders.remove(index);
        self.records.save_orders(&orders)?;
        info!(order_id = %id, "Order deleted");
        Ok(removed)
    }
}

fn merge(into: &mut RolloverReport, other: RolloverReport) {
    if into.monthly.is_none() {
        into.monthly = other.monthly;
    }
    if into.daily.is_none() {
        into.daily = other.daily;
    }
}

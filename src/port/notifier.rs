//! Notifier port for storefront events.
//!
//! Notifications are fire-and-forget: a notifier can never fail the
//! operation that produced the event.

use chrono::NaiveDate;

use crate::domain::{
    DailyArchiveRecord, Money, MonthKey, MonthlyArchiveRecord, Order, OrderId,
};

/// Events emitted by the storefront.
#[derive(Debug, Clone)]
pub enum Event {
    /// A customer placed an order.
    OrderCreated(OrderCreatedEvent),
    /// A day of sales was archived.
    DailyArchived(DailyArchivedEvent),
    /// A month of sales was archived and its orders rotated out.
    MonthlyArchived(MonthlyArchivedEvent),
}

/// New order event.
#[derive(Debug, Clone)]
pub struct OrderCreatedEvent {
    pub order_id: OrderId,
    pub customer_name: String,
    pub phone: String,
    pub total: Money,
    /// Units across all items.
    pub item_count: u64,
}

impl From<&Order> for OrderCreatedEvent {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id.clone(),
            customer_name: order.customer_name.clone(),
            phone: order.phone.clone(),
            total: order.total_amount,
            item_count: order.unit_count(),
        }
    }
}

/// Daily archive event.
#[derive(Debug, Clone)]
pub struct DailyArchivedEvent {
    pub date: NaiveDate,
    pub sales: Money,
    pub orders: u64,
    pub manual: bool,
}

impl From<&DailyArchiveRecord> for DailyArchivedEvent {
    fn from(record: &DailyArchiveRecord) -> Self {
        Self {
            date: record.date,
            sales: record.daily_sales,
            orders: record.daily_orders,
            manual: record.manual_trigger,
        }
    }
}

/// Monthly archive event.
#[derive(Debug, Clone)]
pub struct MonthlyArchivedEvent {
    pub period: MonthKey,
    pub sales: Money,
    pub orders: u64,
    /// Orders moved into the period's archive document.
    pub orders_rotated: usize,
    pub manual: bool,
}

impl From<&MonthlyArchiveRecord> for MonthlyArchivedEvent {
    fn from(record: &MonthlyArchiveRecord) -> Self {
        Self {
            period: record.id,
            sales: record.monthly_sales,
            orders: record.monthly_orders,
            orders_rotated: record.orders_count,
            manual: record.manual_trigger,
        }
    }
}

/// Trait for notification handlers.
///
/// Implementations must be thread-safe and should return quickly.
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotifierRegistry {
    fn notify(&self, event: Event) {
        self.notify_all(event);
    }
}

/// A no-op notifier for when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::info;
        match event {
            Event::OrderCreated(e) => {
                info!(
                    order_id = %e.order_id,
                    customer = %e.customer_name,
                    phone = %e.phone,
                    total = %e.total,
                    items = e.item_count,
                    "New order received"
                );
            }
            Event::DailyArchived(e) => {
                info!(
                    date = %e.date,
                    sales = %e.sales,
                    orders = e.orders,
                    manual = e.manual,
                    "Daily stats archived"
                );
            }
            Event::MonthlyArchived(e) => {
                info!(
                    period = %e.period,
                    sales = %e.sales,
                    orders = e.orders,
                    rotated = e.orders_rotated,
                    manual = e.manual,
                    "Monthly stats archived"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting(Arc<AtomicUsize>);

    impl Notifier for Counting {
        fn notify(&self, _event: Event) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn registry_broadcasts_to_every_notifier() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut registry = NotifierRegistry::new();
        registry.register(Box::new(Counting(count.clone())));
        registry.register(Box::new(Counting(count.clone())));
        registry.register(Box::new(NullNotifier));

        registry.notify_all(Event::DailyArchived(DailyArchivedEvent {
            date: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
            sales: Money::ZERO,
            orders: 0,
            manual: false,
        }));

        assert_eq!(registry.len(), 3);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}

//! Storefront facade wiring the services to a store, a clock and notifiers.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use super::catalog::Catalog;
use super::orders::{OrderBook, PlacedOrder, StatusChange};
use super::records::RecordStore;
use super::rollover::{ManualReset, RolloverReport};
use super::stats::StatsCounter;
use crate::adapter::store::{FileStore, MemoryStore};
use crate::config::{ArchiveConfig, Config};
use crate::domain::{
    DailyArchiveRecord, MonthKey, MonthlyArchiveRecord, NewOrder, Order, OrderId, OrderStatus,
    StatsSnapshot,
};
use crate::error::Result;
use crate::port::{
    Clock, DocumentStore, Event, LogNotifier, Notifier, NotifierRegistry, NullNotifier,
    OrderCreatedEvent, SystemClock,
};

/// Entry point for every back-office operation.
///
/// Cloning is cheap; clones share the same store, clock and notifier.
#[derive(Clone)]
pub struct Storefront {
    records: RecordStore,
    stats: StatsCounter,
    orders: OrderBook,
    catalog: Catalog,
    notifier: Arc<dyn Notifier>,
}

impl Storefront {
    #[must_use]
    pub fn builder() -> StorefrontBuilder {
        StorefrontBuilder::new()
    }

    /// File-backed storefront for `config`, logging events via tracing.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder()
            .data_dir(config.data_dir.clone())
            .archive(config.archive)
            .notifier(LogNotifier)
            .build()
    }

    /// Current counters, after archiving any ended period.
    pub fn stats(&self) -> Result<StatsSnapshot> {
        let (stats, report) = self.stats.roll_over()?;
        self.publish_rollover(&report);
        Ok(stats)
    }

    /// Place an order and notify listeners.
    pub fn create_order(&self, new: NewOrder) -> Result<Order> {
        let PlacedOrder { order, rollover } = self.orders.create(new)?;
        self.publish_rollover(&rollover);
        self.notifier
            .notify(Event::OrderCreated(OrderCreatedEvent::from(&order)));
        Ok(order)
    }

    /// Change an order's status from its wire name.
    pub fn update_order_status(&self, id: &OrderId, status: &str) -> Result<StatusChange> {
        let change = self.orders.update_status(id, status)?;
        self.publish_rollover(&change.rollover);
        Ok(change)
    }

    pub fn set_order_status(&self, id: &OrderId, status: OrderStatus) -> Result<StatusChange> {
        let change = self.orders.set_status(id, status)?;
        self.publish_rollover(&change.rollover);
        Ok(change)
    }

    pub fn order(&self, id: &OrderId) -> Result<Order> {
        self.orders.get(id)
    }

    /// Live orders, newest first.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.list()
    }

    pub fn delete_order(&self, id: &OrderId) -> Result<Order> {
        self.orders.delete(id)
    }

    pub fn daily_archives(&self) -> Vec<DailyArchiveRecord> {
        self.records.daily_archives()
    }

    pub fn monthly_archives(&self) -> Vec<MonthlyArchiveRecord> {
        self.records.monthly_archives()
    }

    /// Months with an archived order document.
    pub fn archived_months(&self) -> Result<Vec<MonthKey>> {
        Ok(self.records.archived_months()?)
    }

    pub fn archived_orders(&self, period: MonthKey) -> Vec<Order> {
        self.records.archived_orders(period)
    }

    /// Archive both periods immediately and zero every counter.
    pub fn manual_reset(&self) -> Result<ManualReset> {
        let reset = self.stats.manual_reset()?;
        self.publish_rollover(&RolloverReport {
            monthly: Some(reset.monthly.clone()),
            daily: reset.daily.clone(),
        });
        Ok(reset)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn publish_rollover(&self, report: &RolloverReport) {
        if let Some(record) = &report.monthly {
            self.notifier.notify(Event::MonthlyArchived(record.into()));
        }
        if let Some(record) = &report.daily {
            self.notifier.notify(Event::DailyArchived(record.into()));
        }
    }
}

/// Builder for [`Storefront`].
///
/// Defaults: file store in `./data`, system clock, default archive
/// settings, no notifications. Every registered notifier receives every
/// event.
#[derive(Default)]
pub struct StorefrontBuilder {
    data_dir: Option<PathBuf>,
    store: Option<Arc<dyn DocumentStore>>,
    clock: Option<Arc<dyn Clock>>,
    archive: ArchiveConfig,
    notifiers: NotifierRegistry,
}

impl StorefrontBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep documents as JSON files in `dir`.
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Use an explicit backend. Takes precedence over [`Self::data_dir`].
    #[must_use]
    pub fn store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Keep documents in memory.
    #[must_use]
    pub fn in_memory(self) -> Self {
        self.store(Arc::new(MemoryStore::new()))
    }

    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn archive(mut self, archive: ArchiveConfig) -> Self {
        self.archive = archive;
        self
    }

    /// Add a notifier to the broadcast list.
    #[must_use]
    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifiers.register(Box::new(notifier));
        self
    }

    /// Open the store and seed missing collections.
    pub fn build(self) -> Result<Storefront> {
        let store: Arc<dyn DocumentStore> = match self.store {
            Some(store) => store,
            None => {
                let dir = self.data_dir.unwrap_or_else(|| PathBuf::from("data"));
                debug!(dir = %dir.display(), "Opening file store");
                Arc::new(FileStore::open(dir)?)
            }
        };
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };
        let notifier: Arc<dyn Notifier> = if self.notifiers.is_empty() {
            Arc::new(NullNotifier)
        } else {
            Arc::new(self.notifiers)
        };

        let records = RecordStore::new(store);
        records.seed(clock.today())?;

        let stats = StatsCounter::new(records.clone(), clock.clone(), self.archive);
        let orders = OrderBook::new(records.clone(), stats.clone(), clock.clone());
        let catalog = Catalog::new(records.clone(), clock);

        Ok(Storefront {
            records,
            stats,
            orders,
            catalog,
            notifier,
        })
    }
}

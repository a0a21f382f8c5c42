//! Typed access to the JSON collections.
//!
//! Reads never fail: an absent, unreadable or corrupt document loads as an
//! empty collection (or fresh stats) and the problem is logged. Writes
//! replace the whole document and propagate failures.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{
    DailyArchiveRecord, MonthKey, MonthlyArchiveRecord, Order, Product, StatsSnapshot,
};
use crate::error::StorageError;
use crate::port::DocumentStore;

const ARCHIVED_ORDERS_PREFIX: &str = "orders-";

/// A named document in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Products,
    /// Live orders of the current month.
    Orders,
    /// Orders rotated out at the end of a month.
    ArchivedOrders(MonthKey),
    Stats,
    MonthlyArchives,
    DailyArchives,
}

impl Collection {
    /// Collections created on first open.
    pub const SEEDED: [Collection; 5] = [
        Collection::Products,
        Collection::Orders,
        Collection::Stats,
        Collection::MonthlyArchives,
        Collection::DailyArchives,
    ];

    /// Document name without extension.
    #[must_use]
    pub fn document(&self) -> String {
        match self {
            Self::Products => "products".into(),
            Self::Orders => "orders".into(),
            Self::ArchivedOrders(period) => format!("{ARCHIVED_ORDERS_PREFIX}{period}"),
            Self::Stats => "stats".into(),
            Self::MonthlyArchives => "monthly-archives".into(),
            Self::DailyArchives => "daily-archives".into(),
        }
    }
}

/// Typed facade over a [`DocumentStore`].
#[derive(Clone)]
pub struct RecordStore {
    store: Arc<dyn DocumentStore>,
}

impl RecordStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Create any missing collection: empty lists, and fresh stats for `today`.
    pub fn seed(&self, today: NaiveDate) -> Result<(), StorageError> {
        for collection in Collection::SEEDED {
            let document = collection.document();
            if self.store.exists(&document)? {
                continue;
            }
            debug!(document = %document, "Seeding collection");
            match collection {
                Collection::Stats => self.save(collection, &StatsSnapshot::fresh(today))?,
                _ => self.save(collection, &Vec::<serde_json::Value>::new())?,
            }
        }
        Ok(())
    }

    /// Load a collection, or `None` when it is absent, unreadable or corrupt.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Option<T> {
        let document = collection.document();
        let contents = match self.store.read(&document) {
            Ok(Some(contents)) => contents,
            Ok(None) => return None,
            Err(err) => {
                warn!(document = %document, error = %err, "Unreadable document, using default");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(document = %document, error = %err, "Corrupt document, using default");
                None
            }
        }
    }

    /// Load a collection, falling back to `T::default()`.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, collection: Collection) -> T {
        self.load(collection).unwrap_or_default()
    }

    /// Overwrite a collection with pretty-printed JSON.
    pub fn save<T: Serialize + ?Sized>(
        &self,
        collection: Collection,
        value: &T,
    ) -> Result<(), StorageError> {
        let document = collection.document();
        let json = serde_json::to_string_pretty(value).map_err(|source| StorageError::Encode {
            document: document.clone(),
            source,
        })?;
        self.store.write(&document, &json)
    }

    /// Current stats, or fresh counters for `today`. Negative amounts are clamped.
    pub fn stats(&self, today: NaiveDate) -> StatsSnapshot {
        self.load::<StatsSnapshot>(Collection::Stats)
            .map_or_else(|| StatsSnapshot::fresh(today), StatsSnapshot::clamped)
    }

    pub fn save_stats(&self, stats: &StatsSnapshot) -> Result<(), StorageError> {
        self.save(Collection::Stats, stats)
    }

    pub fn orders(&self) -> Vec<Order> {
        self.load_or_default(Collection::Orders)
    }

    pub fn save_orders(&self, orders: &[Order]) -> Result<(), StorageError> {
        self.save(Collection::Orders, orders)
    }

    pub fn products(&self) -> Vec<Product> {
        self.load_or_default(Collection::Products)
    }

    pub fn save_products(&self, products: &[Product]) -> Result<(), StorageError> {
        self.save(Collection::Products, products)
    }

    pub fn daily_archives(&self) -> Vec<DailyArchiveRecord> {
        self.load_or_default(Collection::DailyArchives)
    }

    pub fn monthly_archives(&self) -> Vec<MonthlyArchiveRecord> {
        self.load_or_default(Collection::MonthlyArchives)
    }

    /// Orders rotated out for `period`; empty when the month was never archived.
    pub fn archived_orders(&self, period: MonthKey) -> Vec<Order> {
        self.load_or_default(Collection::ArchivedOrders(period))
    }

    /// Months that have an archived order document, oldest first.
    pub fn archived_months(&self) -> Result<Vec<MonthKey>, StorageError> {
        let mut months: Vec<MonthKey> = self
            .store
            .names()?
            .iter()
            .filter_map(|name| name.strip_prefix(ARCHIVED_ORDERS_PREFIX))
            .filter_map(|period| period.parse().ok())
            .collect();
        months.sort();
        Ok(months)
    }
}

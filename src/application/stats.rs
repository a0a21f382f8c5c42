//! Running sales counters over the record store.

use std::sync::Arc;

use super::records::RecordStore;
use super::rollover::{self, RolloverReport};
use crate::config::ArchiveConfig;
use crate::domain::{Order, StatsSnapshot};
use crate::error::Result;
use crate::port::Clock;

/// Reads and updates the persisted [`StatsSnapshot`].
///
/// Every operation first rolls over any ended period, so the counters it
/// touches always belong to the current day and month.
#[derive(Clone)]
pub struct StatsCounter {
    records: RecordStore,
    clock: Arc<dyn Clock>,
    archive: ArchiveConfig,
}

impl StatsCounter {
    pub fn new(records: RecordStore, clock: Arc<dyn Clock>, archive: ArchiveConfig) -> Self {
        Self {
            records,
            clock,
            archive,
        }
    }

    /// Load the counters and archive any ended period.
    pub fn roll_over(&self) -> Result<(StatsSnapshot, RolloverReport)> {
        let now = self.clock.now();
        let mut stats = self.records.stats(now.date_naive());
        let report = rollover::roll_over(&self.records, &mut stats, now, self.archive)?;
        Ok((stats, report))
    }

    /// Current counters, after rollover.
    pub fn get_stats(&self) -> Result<StatsSnapshot> {
        self.roll_over().map(|(stats, _)| stats)
    }

    /// Credit a newly placed order.
    pub fn apply_order_created(&self, order: &Order) -> Result<RolloverReport> {
        let (mut stats, report) = self.roll_over()?;
        stats.record_sale(order.total_amount);
        self.records.save_stats(&stats)?;
        Ok(report)
    }

    /// Debit a cancelled order.
    ///
    /// The daily counters are only debited when the order was placed today;
    /// earlier days have already been archived.
    pub fn apply_order_cancelled(&self, order: &Order) -> Result<RolloverReport> {
        let (mut stats, report) = self.roll_over()?;
        let placed_today = order.created_on() == stats.last_updated;
        stats.reverse_sale(order.total_amount, placed_today);
        self.records.save_stats(&stats)?;
        Ok(report)
    }

    /// Archive both periods and zero the counters.
    pub fn manual_reset(&self) -> Result<rollover::ManualReset> {
        rollover::manual_reset(&self.records, self.clock.now(), self.archive)
    }
}

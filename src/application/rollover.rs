//! Lazy day and month boundary handling.
//!
//! Nothing is scheduled. Every stats access first runs [`roll_over`], which
//! archives whatever period has ended since the last access:
//!
//! 1. On the first of a month, the monthly counters and the live orders of
//!    the previous month are archived and the live collection is emptied.
//!    The stats are moved to today, so the daily counters carry over.
//! 2. When the stats belong to an earlier day, the daily counters are
//!    archived under yesterday's date and reset.
//!
//! Each step persists as it goes. A failed write is logged and propagated
//! without undoing earlier writes.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use tracing::{error, info};

use super::records::{Collection, RecordStore};
use crate::config::ArchiveConfig;
use crate::domain::{
    push_capped, DailyArchiveRecord, MonthKey, MonthlyArchiveRecord, StatsSnapshot,
};
use crate::error::{Result, StorageError};

/// What a rollover pass archived.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RolloverReport {
    pub monthly: Option<MonthlyArchiveRecord>,
    pub daily: Option<DailyArchiveRecord>,
}

impl RolloverReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monthly.is_none() && self.daily.is_none()
    }
}

/// Result of an explicit archive-and-reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManualReset {
    pub monthly: MonthlyArchiveRecord,
    /// Present only when the day had sales or orders.
    pub daily: Option<DailyArchiveRecord>,
    pub stats: StatsSnapshot,
}

/// Run the monthly then the daily check against `stats`.
pub fn roll_over(
    records: &RecordStore,
    stats: &mut StatsSnapshot,
    now: DateTime<Utc>,
    config: ArchiveConfig,
) -> Result<RolloverReport> {
    let monthly = check_monthly(records, stats, now, config).map_err(|err| {
        error!(error = %err, "Monthly rollover failed");
        err
    })?;
    let daily = check_daily(records, stats, now, config).map_err(|err| {
        error!(error = %err, "Daily rollover failed");
        err
    })?;
    Ok(RolloverReport { monthly, daily })
}

/// Archive the previous month when today is the first of the month.
pub fn check_monthly(
    records: &RecordStore,
    stats: &mut StatsSnapshot,
    now: DateTime<Utc>,
    config: ArchiveConfig,
) -> Result<Option<MonthlyArchiveRecord>> {
    let today = now.date_naive();
    if today.day() != 1 {
        return Ok(None);
    }
    let current = MonthKey::of(today);
    if config.guard_monthly_rollover && stats.last_monthly_reset == Some(current) {
        return Ok(None);
    }

    let record = archive_month(records, stats, current.previous(), now, false)?;
    stats.reset_monthly();
    stats.last_updated = today;
    stats.last_monthly_reset = Some(current);
    records.save_stats(stats)?;

    info!(
        period = %record.id,
        sales = %record.monthly_sales,
        orders = record.monthly_orders,
        rotated = record.orders_count,
        "Month archived"
    );
    Ok(Some(record))
}

/// Archive the daily counters when they belong to an earlier day.
pub fn check_daily(
    records: &RecordStore,
    stats: &mut StatsSnapshot,
    now: DateTime<Utc>,
    config: ArchiveConfig,
) -> Result<Option<DailyArchiveRecord>> {
    let today = now.date_naive();
    if stats.last_updated == today {
        return Ok(None);
    }

    let record = if stats.has_daily_activity() {
        let record = archive_day(records, stats, yesterday(today), now, false, config)?;
        info!(
            date = %record.date,
            sales = %record.daily_sales,
            orders = record.daily_orders,
            "Day archived"
        );
        Some(record)
    } else {
        None
    };

    stats.reset_daily(today);
    records.save_stats(stats)?;
    Ok(record)
}

/// Archive both periods now and zero every counter.
///
/// The monthly record is always written, for the month before today. The
/// daily record is written only when the daily counters are non-zero.
pub fn manual_reset(
    records: &RecordStore,
    now: DateTime<Utc>,
    config: ArchiveConfig,
) -> Result<ManualReset> {
    let reset = reset_all(records, now, config).map_err(|err| {
        error!(error = %err, "Manual reset failed");
        err
    })?;
    info!(
        period = %reset.monthly.id,
        daily = reset.daily.is_some(),
        "Manual reset completed"
    );
    Ok(reset)
}

fn reset_all(
    records: &RecordStore,
    now: DateTime<Utc>,
    config: ArchiveConfig,
) -> Result<ManualReset> {
    let today = now.date_naive();
    let mut stats = records.stats(today);

    let monthly = archive_month(records, &stats, MonthKey::of(today).previous(), now, true)?;
    let daily = if stats.has_daily_activity() {
        Some(archive_day(records, &stats, yesterday(today), now, true, config)?)
    } else {
        None
    };

    stats.reset_monthly();
    stats.reset_daily(today);
    records.save_stats(&stats)?;
    Ok(ManualReset {
        monthly,
        daily,
        stats,
    })
}

fn yesterday(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(today)
}

/// Append a monthly record and move the live orders into `period`'s archive.
fn archive_month(
    records: &RecordStore,
    stats: &StatsSnapshot,
    period: MonthKey,
    now: DateTime<Utc>,
    manual: bool,
) -> std::result::Result<MonthlyArchiveRecord, StorageError> {
    let orders = records.orders();
    let record = MonthlyArchiveRecord::snapshot(period, stats, orders.len(), now, manual);

    let mut archives = records.monthly_archives();
    archives.push(record.clone());
    records.save(Collection::MonthlyArchives, &archives)?;

    records.save(Collection::ArchivedOrders(period), &orders)?;
    records.save_orders(&[])?;
    Ok(record)
}

/// Append a daily record under the retention cap.
fn archive_day(
    records: &RecordStore,
    stats: &StatsSnapshot,
    date: NaiveDate,
    now: DateTime<Utc>,
    manual: bool,
    config: ArchiveConfig,
) -> std::result::Result<DailyArchiveRecord, StorageError> {
    let record = DailyArchiveRecord::snapshot(date, stats, now, manual);
    let mut archives = records.daily_archives();
    push_capped(&mut archives, record.clone(), config.daily_retention);
    records.save(Collection::DailyArchives, &archives)?;
    Ok(record)
}

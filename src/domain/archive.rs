//! Immutable period snapshots produced by the rollovers.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::Money;
use super::stats::StatsSnapshot;

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Build a key, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::field("month", format!("month {month} is out of range")));
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before this one; January wraps to December of the prior year.
    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    /// 1-based month number.
    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::field("month", format!("'{s}' is not a YYYY-MM month"));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MonthKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Sales of one completed day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyArchiveRecord {
    pub id: String,
    pub date: NaiveDate,
    pub daily_sales: Money,
    pub daily_orders: u64,
    pub archived_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub manual_trigger: bool,
}

impl DailyArchiveRecord {
    /// Snapshot the daily counters of `stats` as the sales of `date`.
    #[must_use]
    pub fn snapshot(
        date: NaiveDate,
        stats: &StatsSnapshot,
        archived_at: DateTime<Utc>,
        manual_trigger: bool,
    ) -> Self {
        Self {
            id: date.to_string(),
            date,
            daily_sales: stats.daily_sales,
            daily_orders: stats.daily_orders,
            archived_at,
            manual_trigger,
        }
    }
}

/// Sales of one completed month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyArchiveRecord {
    pub id: MonthKey,
    pub month: u32,
    pub year: i32,
    pub monthly_sales: Money,
    pub monthly_orders: u64,
    pub orders_count: usize,
    pub archived_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub manual_trigger: bool,
}

impl MonthlyArchiveRecord {
    /// Snapshot the monthly counters of `stats` as the sales of `period`.
    #[must_use]
    pub fn snapshot(
        period: MonthKey,
        stats: &StatsSnapshot,
        orders_count: usize,
        archived_at: DateTime<Utc>,
        manual_trigger: bool,
    ) -> Self {
        Self {
            id: period,
            month: period.month(),
            year: period.year(),
            monthly_sales: stats.monthly_sales,
            monthly_orders: stats.monthly_orders,
            orders_count,
            archived_at,
            manual_trigger,
        }
    }
}

/// Append `record` and drop the oldest entries beyond `retention`.
pub fn push_capped(records: &mut Vec<DailyArchiveRecord>, record: DailyArchiveRecord, retention: usize) {
    records.push(record);
    if records.len() > retention {
        let excess = records.len() - retention;
        records.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn previous_wraps_january() {
        let jan = MonthKey::new(2025, 1).unwrap();
        assert_eq!(jan.previous(), MonthKey::new(2024, 12).unwrap());
        assert_eq!(MonthKey::new(2025, 4).unwrap().previous().to_string(), "2025-03");
    }

    #[test]
    fn month_key_parses_and_rejects() {
        assert_eq!("2025-03".parse::<MonthKey>().unwrap(), MonthKey::new(2025, 3).unwrap());
        assert!("2025-13".parse::<MonthKey>().is_err());
        assert!("2025-3".parse::<MonthKey>().is_err());
        assert!("march".parse::<MonthKey>().is_err());
    }

    #[test]
    fn monthly_record_serializes_id_as_string() {
        let stats = StatsSnapshot {
            monthly_sales: dec!(300),
            monthly_orders: 3,
            ..StatsSnapshot::fresh(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
        };
        let at = Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap();
        let record = MonthlyArchiveRecord::snapshot(
            MonthKey::new(2025, 3).unwrap(),
            &stats,
            3,
            at,
            false,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "2025-03");
        assert_eq!(json["month"], 3);
        assert_eq!(json["ordersCount"], 3);
        assert!(json.get("manualTrigger").is_none());
    }

    #[test]
    fn push_capped_evicts_oldest_first() {
        let stats = StatsSnapshot::fresh(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let mut records = Vec::new();

        for offset in 0..5u64 {
            let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(offset);
            push_capped(
                &mut records,
                DailyArchiveRecord::snapshot(date, &stats, at, false),
                3,
            );
        }

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2025-01-03", "2025-01-04", "2025-01-05"]);
    }
}

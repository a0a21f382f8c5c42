//! Archival settings.

use serde::Deserialize;

/// How rollovers archive completed periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Number of daily archive records kept; older ones are dropped first.
    pub daily_retention: usize,

    /// Run the first-of-month rollover once per month.
    ///
    /// When false, every access on the first of the month archives and
    /// rotates again, so later accesses that day write zeroed records and
    /// overwrite the previous month's order file with that day's orders.
    pub guard_monthly_rollover: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            daily_retention: 30,
            guard_monthly_rollover: true,
        }
    }
}

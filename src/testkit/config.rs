//! Canonical test configurations.

use crate::config::ArchiveConfig;

/// Default archive settings: 30 daily records, guarded monthly rollover.
pub fn archive() -> ArchiveConfig {
    ArchiveConfig::default()
}

/// Monthly rollover fires on every access on the first of the month.
pub fn unguarded_archive() -> ArchiveConfig {
    ArchiveConfig {
        guard_monthly_rollover: false,
        ..ArchiveConfig::default()
    }
}

/// Custom daily retention.
pub fn retention(daily_retention: usize) -> ArchiveConfig {
    ArchiveConfig {
        daily_retention,
        ..ArchiveConfig::default()
    }
}

//! Settable clock.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;

use crate::port::Clock;

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock at 10:00 UTC on the given day.
    ///
    /// # Panics
    ///
    /// Panics on an invalid date.
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        Self::new(at(year, month, day))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }

    /// Jump to 10:00 UTC on another day.
    pub fn set_day(&self, year: i32, month: u32, day: u32) {
        self.set(at(year, month, day));
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// 10:00 UTC on the given day.
///
/// # Panics
///
/// Panics on an invalid date.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
        .single()
        .expect("valid test date")
}

/// Calendar day shorthand.
///
/// # Panics
///
/// Panics on an invalid date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

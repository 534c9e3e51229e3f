//! Calendar/time seam for registry operations.
//!
//! # Responsibility
//! - Supply "now" and "current calendar year" to the numbering and
//!   year-transition rules.
//! - Keep year derivation deterministic and testable without pulling a
//!   calendar crate in: timestamps are epoch milliseconds everywhere in this
//!   store, so the year falls out of plain civil-calendar arithmetic.

use std::time::{SystemTime, UNIX_EPOCH};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Time source injected into the registry service.
pub trait Clock {
    /// Current instant in epoch milliseconds (UTC).
    fn now_epoch_ms(&self) -> i64;

    /// Current calendar year (UTC).
    fn current_year(&self) -> i32 {
        civil_from_days(self.now_epoch_ms().div_euclid(MS_PER_DAY)).0
    }
}

/// Wall-clock time source used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            // Pre-epoch system clocks collapse to the epoch itself.
            Err(_) => 0,
        }
    }
}

/// Pinned time source for deterministic tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    epoch_ms: i64,
}

impl FixedClock {
    /// Pins the clock to an exact epoch-millisecond instant.
    pub fn at_epoch_ms(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }

    /// Pins the clock to midnight UTC on the given civil date.
    pub fn at_civil_date(year: i32, month: u32, day: u32) -> Self {
        Self {
            epoch_ms: days_from_civil(year, month, day) * MS_PER_DAY,
        }
    }

    /// Pins the clock to the first instant of the given year.
    pub fn for_year(year: i32) -> Self {
        Self::at_civil_date(year, 1, 1)
    }
}

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        self.epoch_ms
    }
}

// Civil-calendar conversions after Howard Hinnant's public-domain
// `days_from_civil` / `civil_from_days` algorithms.

fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let adjusted_year = i64::from(year) - if month <= 2 { 1 } else { 0 };
    let month = i64::from(month);
    let day = i64::from(day);

    let era = if adjusted_year >= 0 {
        adjusted_year
    } else {
        adjusted_year - 399
    } / 400;
    let year_of_era = adjusted_year - era * 400;
    let day_of_year = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * 146_097 + day_of_era - 719_468
}

fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let shifted = days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let year = year_of_era + era * 400;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = if month <= 2 { year + 1 } else { year };

    (year as i32, month as u32, day as u32)
}

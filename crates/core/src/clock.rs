// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock policy: wall-clock time in the fixed accounting zone
//!
//! All scheduling is anchored to a single named IANA zone. The clock is a
//! trait so tests can drive time with [`FakeClock`] instead of sleeping.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDateTime, NaiveTime, Utc, Weekday,
};
use chrono_tz::Tz;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// A clock that provides the current wall-clock instant
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Real clock reading system time in a configured zone
#[derive(Clone)]
pub struct WallClock {
    zone: Option<Tz>,
}

impl WallClock {
    /// Resolve a named IANA zone. An unknown name falls back to the
    /// process's local zone, which silently changes the meaning of every
    /// scheduled instant, so the fallback is logged.
    pub fn for_zone(name: &str) -> Self {
        match name.parse::<Tz>() {
            Ok(tz) => Self { zone: Some(tz) },
            Err(_) => {
                warn!(zone = name, "unknown time zone, falling back to local time");
                Self { zone: None }
            }
        }
    }
}

impl Clock for WallClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.zone {
            Some(tz) => Utc::now().with_timezone(&tz).fixed_offset(),
            None => Local::now().fixed_offset(),
        }
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl FakeClock {
    /// Create a clock frozen at the given instant
    pub fn at(start: DateTime<FixedOffset>) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, delta: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = *current + delta;
    }

    /// Set the clock to a specific instant
    pub fn set(&self, to: DateTime<FixedOffset>) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = to;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// The most recent Monday 00:00:00 at or before `now`, in `now`'s offset.
///
/// Weekday numbering follows Monday=0 through Sunday=6; the accounting
/// week runs Monday midnight to Monday midnight.
pub fn start_of_week(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let days_back = i64::from(now.weekday().num_days_from_monday());
    let monday = now.date_naive() - Duration::days(days_back);
    at_local(monday.and_time(NaiveTime::MIN), *now.offset())
}

/// The next instant strictly after `now` matching the given weekday and
/// time-of-day. Exact equality counts as already passed, so the result is
/// always in the future and never more than 7 days ahead.
pub fn next_occurrence(
    now: DateTime<FixedOffset>,
    weekday: Weekday,
    at: NaiveTime,
) -> DateTime<FixedOffset> {
    let days_ahead = i64::from(
        (weekday.num_days_from_monday() + 7 - now.weekday().num_days_from_monday()) % 7,
    );
    let date = now.date_naive() + Duration::days(days_ahead);
    let candidate = at_local(date.and_time(at), *now.offset());
    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

fn at_local(naive: NaiveDateTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let utc = naive - Duration::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;

// src/store/clock.rs

use chrono::{Local, NaiveDateTime};

/// Source of wall-clock time for log stamps.
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[cfg(test)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Everything time-derived a transition may need, computed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// Unique within the process: milliseconds of the local wall-clock time
    /// (read as if it were UTC, so not an epoch timestamp) plus a per-store
    /// sequence number.
    pub id: String,
    /// Human readable, e.g. `2026-10-17 14:03:09`.
    pub timestamp: String,
    /// Date only, written to `PriceData::last_updated`.
    pub date: String,
}

impl Stamp {
    pub fn at(now: NaiveDateTime, seq: u64) -> Self {
        Self {
            id: format!("{}-{seq}", now.and_utc().timestamp_millis()),
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            date: now.format("%Y-%m-%d").to_string(),
        }
    }
}

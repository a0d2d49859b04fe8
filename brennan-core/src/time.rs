//! Time management for the generators
//!
//! Provides a clock abstraction so results that embed "now" (failure dates,
//! maintenance windows, last-updated stamps) can be pinned in tests:
//! - System clock for normal use
//! - Fixed clock for deterministic tests

use chrono::{DateTime, Duration, Utc};

use crate::constants::SECONDS_PER_DAY;

/// Wall-clock timestamp carried in results
pub type Timestamp = DateTime<Utc>;

/// Source of the current time
pub trait Clock: Send {
    /// Current wall-clock time
    fn now(&self) -> Timestamp;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: Timestamp,
}

impl FixedClock {
    /// Clock pinned at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Fixed clock at a Unix timestamp in milliseconds
    pub fn from_millis(millis: i64) -> Self {
        Self {
            timestamp: DateTime::from_timestamp_millis(millis).unwrap_or_default(),
        }
    }

    /// Move to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `by`
    pub fn advance(&mut self, by: Duration) {
        self.timestamp += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// A span of (possibly fractional) days
pub fn days(days: f64) -> Duration {
    Duration::milliseconds((days * SECONDS_PER_DAY as f64 * 1000.0).round() as i64)
}

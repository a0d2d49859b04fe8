//! Shared fixtures for generator integration tests
//!
//! - Deterministic engines (seeded RNG, pinned clock, zero latency)
//! - Sample inputs matching the dashboard demos
//! - Range assertion helper

#![allow(dead_code)]

use brennan_core::{FixedClock, LatencyProfile, ScheduleTask, SensorRecord};
use brennan_insights::SyntheticInsights;
use rand::rngs::StdRng;

/// 2023-11-14T22:13:20Z
pub const EPOCH_MS: i64 = 1_700_000_000_000;

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

pub type TestEngine = SyntheticInsights<StdRng, FixedClock>;

/// Zero-latency engine with a pinned clock
pub fn engine(seed: u64) -> TestEngine {
    SyntheticInsights::seeded(seed)
        .with_clock(FixedClock::from_millis(EPOCH_MS))
        .with_latency(LatencyProfile::instant())
}

/// Engine with default latencies, for paused-time tests
pub fn slow_engine(seed: u64) -> TestEngine {
    SyntheticInsights::seeded(seed).with_clock(FixedClock::from_millis(EPOCH_MS))
}

/// Production line used by the scheduling demo
pub fn demo_tasks() -> Vec<ScheduleTask> {
    vec![
        ScheduleTask::new("A", 2.0, 8),
        ScheduleTask::new("B", 3.0, 6),
        ScheduleTask::new("C", 1.0, 9),
    ]
}

/// `count` sensors cycling through three kinds
pub fn sensor_network(count: usize) -> Vec<SensorRecord> {
    const KINDS: [&str; 3] = ["temperature", "vibration", "pressure"];
    (0..count)
        .map(|i| SensorRecord::new(format!("sensor-{i:03}"), 40.0 + i as f64, KINDS[i % KINDS.len()]))
        .collect()
}

#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $range:expr) => {
        assert!(
            $range.contains(&$value),
            "{} = {:?} outside {:?}",
            stringify!($value),
            $value,
            $range
        );
    };
}

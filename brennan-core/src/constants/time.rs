//! Time-Related Constants
//!
//! Simulated inference latencies and calendar conversions. The latencies
//! are defaults for [`LatencyProfile`](crate::latency::LatencyProfile);
//! tests replace them with zero.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per day.
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

// ===== SIMULATED LATENCIES (milliseconds) =====

/// Equipment failure prediction.
pub const MAINTENANCE_LATENCY_MS: u64 = 800;

/// Image quality inspection.
pub const QUALITY_LATENCY_MS: u64 = 1200;

/// Schedule optimization.
pub const SCHEDULE_LATENCY_MS: u64 = 1800;

/// IoT network analysis.
pub const IOT_LATENCY_MS: u64 = 400;

/// Insight generation.
pub const INSIGHTS_LATENCY_MS: u64 = 600;

/// Health assessment.
pub const HEALTH_LATENCY_MS: u64 = 1200;

/// Blockchain snapshot.
pub const BLOCKCHAIN_LATENCY_MS: u64 = 1000;

/// Assistant reply delay before the responder is consulted.
pub const CHAT_REPLY_LATENCY_MS: u64 = 1500;

// ===== INTERACTION WINDOWS =====

/// Speech recognition stops on its own after this long.
pub const LISTEN_WINDOW_MS: u64 = 5000;

/// Default refresh interval for live dashboards.
pub const LIVE_REFRESH_MS: u64 = 3000;

/// Business intelligence panel refresh.
pub const BUSINESS_REFRESH_MS: u64 = 3000;

/// Market ticker refresh.
pub const TICKER_REFRESH_MS: u64 = 2000;

/// Trading signal refresh.
pub const SIGNAL_REFRESH_MS: u64 = 30_000;

/// Data stream refresh.
pub const STREAM_REFRESH_MS: u64 = 1000;

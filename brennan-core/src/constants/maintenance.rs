//! Predictive Maintenance Risk Scoring
//!
//! The risk score is a weighted linear combination of the four channels of a
//! [`SensorReading`](crate::models::SensorReading), divided by 100:
//!
//! ```text
//! risk = (vibration·0.30 + temperature·0.25 + pressure·0.25 + acoustics·0.20) / 100
//! ```
//!
//! The weights sum to 1.0, so readings on a 0-100 scale give a score in
//! `[0, 1]`. Readings are not range-checked; anything outside that scale
//! still produces a score.

use super::Band;

// ===== CHANNEL WEIGHTS =====

/// Weight of the vibration channel.
pub const VIBRATION_WEIGHT: f64 = 0.30;

/// Weight of the temperature channel.
pub const TEMPERATURE_WEIGHT: f64 = 0.25;

/// Weight of the pressure channel.
pub const PRESSURE_WEIGHT: f64 = 0.25;

/// Weight of the acoustic channel.
pub const ACOUSTICS_WEIGHT: f64 = 0.20;

/// Divisor bringing the weighted sum onto the unit scale.
pub const RISK_SCALE: f64 = 100.0;

// ===== RISK THRESHOLDS =====

/// Scores strictly above this are `HIGH` risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Scores strictly above this (and not `HIGH`) are `MEDIUM` risk.
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.4;

// ===== FAILURE HORIZONS =====

/// Days until predicted failure at `HIGH` risk.
pub const HIGH_RISK_HORIZON_DAYS: i64 = 3;

/// Days until predicted failure at `MEDIUM` risk.
pub const MEDIUM_RISK_HORIZON_DAYS: i64 = 14;

/// Days until predicted failure at `LOW` risk.
pub const LOW_RISK_HORIZON_DAYS: i64 = 60;

// ===== CONFIDENCE =====

/// Raw confidence draw before clamping.
pub const CONFIDENCE_DRAW: Band = Band::new(90.0, 8.0);

/// Reported confidence is clamped into this band.
pub const CONFIDENCE_BAND: Band = Band::new(85.0, 13.0);

// ===== EFFICIENCY =====

/// Efficiency when the risk score is zero.
pub const EFFICIENCY_CEILING: f64 = 95.0;

/// Efficiency lost per unit of risk score.
pub const EFFICIENCY_PER_RISK: f64 = 20.0;

// ===== RECOMMENDATIONS =====

/// Ordered recommendations at `HIGH` risk.
pub const HIGH_RISK_RECOMMENDATIONS: [&str; 3] = [
    "Critical: Immediate shutdown required",
    "Emergency maintenance team dispatch",
    "Replace primary bearings",
];

/// Ordered recommendations at `MEDIUM` risk.
pub const MEDIUM_RISK_RECOMMENDATIONS: [&str; 3] = [
    "Schedule preventive maintenance within 48h",
    "Monitor vibration patterns",
    "Check lubrication systems",
];

/// Ordered recommendations at `LOW` risk.
pub const LOW_RISK_RECOMMENDATIONS: [&str; 3] = [
    "Continue normal operation",
    "Routine inspection in 30 days",
    "Monitor trending data",
];

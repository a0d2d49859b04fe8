//! Constants for Brennan Core
//!
//! Centralized thresholds, value bands, fixed text pools and default
//! latencies used by the synthetic insight generator and the assistant.
//! Every number the generator produces comes from one of the bands defined
//! here, so the documented output ranges live in exactly one place.
//!
//! ## Organization
//!
//! Constants are grouped by capability:
//! - **Maintenance**: risk weights, thresholds, failure horizons
//! - **Quality**: defect pool and inspection metric bands
//! - **Schedule**: slot compression factor and "quantum" metrics
//! - **IoT**: anomaly rate, severity cutoffs, canned insights
//! - **NLP**: summary pool and trends
//! - **Health**: risk cutoffs and vital-sign limits
//! - **Blockchain**: market snapshot, ticker bands and trading signals
//! - **Business**: live BI metrics and headline pool
//! - **Stream**: data-stream sources and window size
//! - **Assistant**: persona text, topic routing, plugin parameters
//! - **Time**: simulated latencies and calendar conversions

/// Risk scoring for predictive maintenance.
pub mod maintenance;

/// Visual quality inspection bands and defect pool.
pub mod quality;

/// Schedule packing factor and optimization metrics.
pub mod schedule;

/// IoT anomaly flagging parameters.
pub mod iot;

/// Insight summary pool.
pub mod nlp;

/// Health assessment cutoffs and vital-sign bounds.
pub mod health;

/// Blockchain snapshot and ticker bands.
pub mod blockchain;

/// Business intelligence live metrics.
pub mod business;

/// Real-time data stream.
pub mod stream;

/// Assistant persona, canned responses and plugin parameters.
pub mod assistant;

/// Simulated latencies and time conversions.
pub mod time;

use serde::{Deserialize, Serialize};

/// A closed numeric band `[base, base + width]`.
///
/// Draws map a unit sample `u ∈ [0, 1)` onto the band as `base + u * width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower edge of the band
    pub base: f64,
    /// Distance from the lower to the upper edge
    pub width: f64,
}

impl Band {
    /// Create a band starting at `base` spanning `width`
    pub const fn new(base: f64, width: f64) -> Self {
        Self { base, width }
    }

    /// Lower edge
    pub const fn min(&self) -> f64 {
        self.base
    }

    /// Upper edge
    pub fn max(&self) -> f64 {
        self.base + self.width
    }

    /// Map a unit sample onto the band
    pub fn at(&self, unit: f64) -> f64 {
        self.base + unit.clamp(0.0, 1.0) * self.width
    }

    /// Whether `value` lies inside the band (edges included)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

pub use maintenance::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
pub use quality::DEFECT_THRESHOLD;
pub use schedule::SLOT_COMPRESSION;
pub use iot::ANOMALY_THRESHOLD;
pub use time::SECONDS_PER_DAY;

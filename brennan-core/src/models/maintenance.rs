//! Predictive maintenance input and result

use serde::{Deserialize, Serialize};

use super::RiskLevel;
use crate::constants::maintenance::*;
use crate::time::Timestamp;

/// One snapshot of an asset's four monitored channels
///
/// Values are nominally on a 0-100 scale but are never range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorReading {
    /// Vibration channel
    pub vibration: f64,
    /// Temperature channel
    pub temperature: f64,
    /// Pressure channel
    pub pressure: f64,
    /// Acoustic channel
    pub acoustics: f64,
}

impl SensorReading {
    /// Reading from its four channels
    pub fn new(vibration: f64, temperature: f64, pressure: f64, acoustics: f64) -> Self {
        Self {
            vibration,
            temperature,
            pressure,
            acoustics,
        }
    }

    /// Weighted risk score; see [`crate::constants::maintenance`]
    pub fn risk_score(&self) -> f64 {
        (self.vibration * VIBRATION_WEIGHT
            + self.temperature * TEMPERATURE_WEIGHT
            + self.pressure * PRESSURE_WEIGHT
            + self.acoustics * ACOUSTICS_WEIGHT)
            / RISK_SCALE
    }
}

/// Equipment failure prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePrediction {
    /// From the risk score
    pub risk_level: RiskLevel,
    /// Score the level was derived from
    pub risk_score: f64,
    /// In `[85, 98]`, independent of risk
    pub confidence: f64,
    /// Now plus the level's horizon
    pub predicted_failure_date: Timestamp,
    /// Three actions for the level
    pub maintenance_recommendations: Vec<String>,
    /// Echoed and derived metrics
    pub real_time_metrics: MaintenanceMetrics,
}

/// Live metrics echoed back with a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceMetrics {
    /// `round(95 - risk_score * 20)`
    pub efficiency: i64,
    /// Echoed temperature channel
    pub temperature: f64,
    /// Echoed vibration channel
    pub vibration_level: f64,
    /// When the prediction was made
    pub last_updated: Timestamp,
}

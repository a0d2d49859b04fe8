//! IoT network analysis input and result

use serde::{Deserialize, Serialize};

use super::Severity;
use crate::time::Timestamp;

/// One sensor's latest value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    /// Sensor identifier
    pub id: String,
    /// Latest reading
    pub value: f64,
    /// Sensor kind, serialized as `type`
    #[serde(rename = "type")]
    pub kind: String,
}

impl SensorRecord {
    /// Record from id, value and kind
    pub fn new(id: impl Into<String>, value: f64, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value,
            kind: kind.into(),
        }
    }
}

/// A sensor flagged as anomalous
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Id of the flagged record
    pub sensor: String,
    /// Type of the flagged record
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description
    pub anomaly: String,
    /// From an independent draw
    pub severity: Severity,
    /// In `[85, 98]`
    pub confidence: u32,
}

/// Network-level forecasts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoTPredictions {
    /// 10 to 20 days ahead
    pub next_maintenance: Timestamp,
    /// Percent
    pub efficiency_forecast: u32,
    /// `"<N>% reduction achievable"`
    pub energy_optimization: String,
    /// `"$<N>/month"`
    pub cost_savings: String,
}

/// Presentation-only model metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlMetrics {
    /// Percent
    pub prediction_accuracy: u32,
    /// `"<N> events/sec"`
    pub data_processing_rate: String,
    /// Percent
    pub model_training_efficiency: u32,
}

/// Result of scanning a sensor network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoTAnalysis {
    /// At most one entry per input record, in input order
    pub anomalies: Vec<Anomaly>,
    /// Forward-looking figures
    pub predictions: IoTPredictions,
    /// Fixed insight lines
    pub real_time_insights: Vec<String>,
    /// Model statistics
    #[serde(rename = "mlMetrics")]
    pub ml_metrics: MlMetrics,
}

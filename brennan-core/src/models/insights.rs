//! Free-text insight summary

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Canned "NLP" summary of submitted text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    /// One of the fixed summary sentences
    pub summary: String,
    /// Headline figures
    pub key_metrics: KeyMetrics,
    /// Fixed trend lines
    pub trends: Vec<String>,
    /// Current load
    pub real_time_data: RealTimeData,
}

/// Headline figures of a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    /// Percent
    pub efficiency: u32,
    /// Percent
    pub accuracy: u32,
    /// Dollars
    pub cost_savings: u64,
    /// `"<N>ms"`
    pub processing_speed: String,
}

/// Processing load when the summary was made
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeData {
    /// Percent
    pub current_load: u32,
    /// Running jobs
    pub active_processes: u32,
    /// When the summary was made
    pub last_processed: Timestamp,
}

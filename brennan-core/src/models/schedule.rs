//! Schedule optimization input and result

use serde::{Deserialize, Serialize};

/// A task waiting to be scheduled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTask {
    /// Task identifier
    pub id: String,
    /// Hours
    pub duration: f64,
    /// Higher runs first
    pub priority: i32,
}

impl ScheduleTask {
    /// Task from id, duration and priority
    pub fn new(id: impl Into<String>, duration: f64, priority: i32) -> Self {
        Self {
            id: id.into(),
            duration,
            priority,
        }
    }
}

/// A task with its assigned slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedTask {
    /// The input task
    #[serde(flatten)]
    pub task: ScheduleTask,
    /// Hours from the schedule start
    pub start_time: f64,
    /// Start plus the compressed duration
    pub end_time: f64,
    /// Always true
    pub quantum_optimized: bool,
}

impl OptimizedTask {
    /// Length of the assigned slot
    pub fn slot(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Packed schedule plus presentation metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedSchedule {
    /// Tasks in descending priority, packed back to back from 0
    #[serde(rename = "optimizedSchedule")]
    pub optimized_schedule: Vec<OptimizedTask>,
    /// In `[35, 60]` percent
    pub efficiency_improvement: u32,
    /// Fixed method label
    pub processing_method: String,
    /// `"<N>x faster than classical methods"`
    pub quantum_advantage: String,
    /// Optimizer metrics
    #[serde(rename = "realTimeMetrics")]
    pub real_time_metrics: QuantumMetrics,
}

impl OptimizedSchedule {
    /// End of the last slot, or 0 for an empty schedule
    pub fn makespan(&self) -> f64 {
        self.optimized_schedule
            .last()
            .map(|task| task.end_time)
            .unwrap_or(0.0)
    }
}

/// Presentation-only "quantum" metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantumMetrics {
    /// Percent
    pub quantum_coherence: u32,
    /// Percent, one decimal
    pub error_correction: f64,
    /// Percent
    pub entanglement_rate: u32,
}

//! Insight Summaries
//!
//! The summary is drawn uniformly from [`SUMMARY_POOL`]; the submitted text
//! is never read.

use super::Band;

/// Fixed pool of summary sentences.
pub const SUMMARY_POOL: [&str; 6] = [
    "AI processing efficiency improved by 23% with quantum optimization",
    "Real-time analytics reduced decision latency by 67%",
    "Computer vision accuracy reached 99.8% with advanced neural networks",
    "Blockchain transactions optimized, reducing gas fees by 45%",
    "Medical AI diagnosis confidence increased to 97.3%",
    "Business intelligence predictions showing 89% accuracy rate",
];

/// Fixed trend lines.
pub const TRENDS: [&str; 3] = [
    "Exponential AI improvement",
    "Cost optimization trending",
    "Performance metrics exceeding targets",
];

/// Efficiency band.
pub const EFFICIENCY_BAND: Band = Band::new(90.0, 8.0);

/// Accuracy band.
pub const ACCURACY_BAND: Band = Band::new(95.0, 4.0);

/// Cost savings band, in dollars.
pub const COST_SAVINGS_BAND: Band = Band::new(500_000.0, 200_000.0);

/// Processing speed band, in milliseconds.
pub const PROCESSING_SPEED_BAND: Band = Band::new(15.0, 10.0);

/// Current load band, in percent.
pub const CURRENT_LOAD_BAND: Band = Band::new(60.0, 30.0);

/// Active process count band.
pub const ACTIVE_PROCESSES_BAND: Band = Band::new(15.0, 10.0);

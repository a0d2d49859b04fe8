//! Value Types Exchanged with the Insight Generator
//!
//! ## Overview
//!
//! Every type here is a transient value object: built by a caller or a
//! generator, consumed once, never persisted. Inputs are small and typed;
//! results mirror the JSON shapes the dashboards already render, so field
//! names follow those shapes (mostly camelCase, snake_case where the
//! dashboards used it).
//!
//! ## Invariants
//!
//! - Every confidence or score field lies inside the band documented in
//!   [`constants`](crate::constants).
//! - Every derived level ([`RiskLevel`], [`Recommendation`], severity) is a
//!   pure function of a computed scalar or of an independent random draw,
//!   never of unconstrained external input.
//!
//! ## Capabilities
//!
//! | Input | Result | Module |
//! |-------|--------|--------|
//! | [`SensorReading`] | [`MaintenancePrediction`] | `maintenance` |
//! | [`ImageHandle`] | [`QualityAssessment`] | `quality` |
//! | [`ScheduleTask`] list | [`OptimizedSchedule`] | `schedule` |
//! | [`SensorRecord`] list | [`IoTAnalysis`] | `iot` |
//! | free text | [`InsightSummary`] | `insights` |
//! | [`HealthSample`] | [`HealthAssessment`] | `health` |
//! | none | [`BlockchainSnapshot`], [`MarketTicker`], [`TradingSignal`] | `blockchain` |
//! | none | [`BusinessPulse`] | `business` |
//! | none | [`DataPoint`] into a [`StreamWindow`] | `stream` |

pub mod blockchain;
pub mod business;
pub mod health;
pub mod insights;
pub mod iot;
pub mod levels;
pub mod maintenance;
pub mod quality;
pub mod schedule;
pub mod stream;

pub use blockchain::{
    BlockchainSnapshot, DefiMetrics, MarketTicker, NetworkStats, PriceAnalysis, TradingMetrics, TradingSignal,
};
pub use business::BusinessPulse;
pub use health::{BloodPressure, HealthAssessment, HealthSample, VitalSigns};
pub use insights::{InsightSummary, KeyMetrics, RealTimeData};
pub use iot::{Anomaly, IoTAnalysis, IoTPredictions, MlMetrics, SensorRecord};
pub use levels::{MarketTrend, Recommendation, RiskLevel, Severity, SignalAction};
pub use maintenance::{MaintenanceMetrics, MaintenancePrediction, SensorReading};
pub use quality::{ImageHandle, InspectionMetrics, QualityAssessment};
pub use schedule::{OptimizedSchedule, OptimizedTask, QuantumMetrics, ScheduleTask};
pub use stream::{DataPoint, StreamWindow};

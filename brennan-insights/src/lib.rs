//! Synthetic Insight Generator for Brennan Dashboards
//!
//! ## Overview
//!
//! Every dashboard panel is backed by one asynchronous capability that waits a
//! short simulated latency and then returns a plausible result. Nothing here
//! is a trained model: values are bounded random draws, and only a few fields
//! follow deterministically from the input.
//!
//! | Capability | Input drives | Random |
//! |------------|--------------|--------|
//! | Maintenance | risk level, horizon, recommendations, efficiency | confidence |
//! | Quality | nothing | everything |
//! | Schedule | order and slots | metrics |
//! | IoT | anomaly sensor ids | flagging, severity, metrics |
//! | Insights | nothing | summary pick, metrics |
//! | Health | risk level, emergency flag | confidence, recovery |
//! | Blockchain | nothing | everything |
//! | Business | nothing | everything but the clock |
//! | Stream | nothing | value, source |
//!
//! ## Determinism
//!
//! [`SyntheticInsights`] owns its randomness source, clock and
//! [`LatencyProfile`]. Seed the RNG, pin the clock and use
//! [`LatencyProfile::instant`] to make every result reproducible:
//!
//! ```rust
//! use brennan_core::{FixedClock, LatencyProfile, RiskLevel, SensorReading};
//! use brennan_insights::SyntheticInsights;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let mut engine = SyntheticInsights::seeded(7)
//!     .with_clock(FixedClock::from_millis(1_700_000_000_000))
//!     .with_latency(LatencyProfile::instant());
//!
//! let prediction = engine.predict_failure(&SensorReading::new(95.0, 88.0, 70.0, 80.0)).await;
//! assert_eq!(prediction.risk_level, RiskLevel::High);
//! # });
//! ```
//!
//! ## Live Panels
//!
//! Every capability except insights can be refreshed periodically; see
//! [`live`]. Business metrics, the market ticker and the data stream are
//! live-only feeds: their operations are synchronous and skip the simulated
//! latency, and [`Capability::refresh_period`] gives each its own cadence.

use std::fmt;
use std::time::Duration;

use brennan_core::latency::simulate;
use brennan_core::time::{Clock, SystemClock};
use brennan_core::constants::time::{BUSINESS_REFRESH_MS, STREAM_REFRESH_MS, TICKER_REFRESH_MS};
use brennan_core::{
    BlockchainSnapshot, BusinessPulse, DataPoint, HealthAssessment, HealthSample, ImageHandle, InsightSummary,
    IoTAnalysis, LatencyProfile, MaintenancePrediction, MarketTicker, OptimizedSchedule, QualityAssessment,
    ScheduleTask, SensorReading, SensorRecord, StreamWindow, TradingSignal, VitalSigns,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub mod blockchain;
pub mod business;
pub mod health;
pub mod iot;
pub mod live;
pub mod maintenance;
pub mod nlp;
pub mod quality;
pub mod schedule;
pub mod scoring;
pub mod stream;

pub use live::{LiveBoard, LiveFrame, LivePoller, DEFAULT_REFRESH};
pub use scoring::Draw;

/// Panels a dashboard can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Maintenance,
    Quality,
    Schedule,
    Iot,
    Insights,
    Health,
    Blockchain,
    /// Live BI metrics strip
    Business,
    /// Rolling activity stream
    Stream,
}

impl Capability {
    pub const ALL: [Capability; 9] = [
        Capability::Maintenance,
        Capability::Quality,
        Capability::Schedule,
        Capability::Iot,
        Capability::Insights,
        Capability::Health,
        Capability::Blockchain,
        Capability::Business,
        Capability::Stream,
    ];

    /// Whether the panel supports live refresh
    pub const fn is_real_time(&self) -> bool {
        !matches!(self, Capability::Insights)
    }

    /// Delay this capability waits in `profile`; zero for the live-only feeds
    pub fn latency(&self, profile: &LatencyProfile) -> Duration {
        match self {
            Capability::Maintenance => profile.maintenance,
            Capability::Quality => profile.quality,
            Capability::Schedule => profile.schedule,
            Capability::Iot => profile.iot,
            Capability::Insights => profile.insights,
            Capability::Health => profile.health,
            Capability::Blockchain => profile.blockchain,
            Capability::Business | Capability::Stream => Duration::ZERO,
        }
    }

    /// Live refresh cadence of the panel
    pub const fn refresh_period(&self) -> Duration {
        match self {
            Capability::Business => Duration::from_millis(BUSINESS_REFRESH_MS),
            Capability::Blockchain => Duration::from_millis(TICKER_REFRESH_MS),
            Capability::Stream => Duration::from_millis(STREAM_REFRESH_MS),
            _ => DEFAULT_REFRESH,
        }
    }

    pub fn default_latency(&self) -> Duration {
        self.latency(&LatencyProfile::default())
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Capability::Maintenance => "maintenance",
            Capability::Quality => "quality",
            Capability::Schedule => "schedule",
            Capability::Iot => "iot",
            Capability::Insights => "insights",
            Capability::Health => "health",
            Capability::Blockchain => "blockchain",
            Capability::Business => "business",
            Capability::Stream => "stream",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The generator behind every dashboard panel
///
/// Operations take `&mut self` because each one advances the RNG.
#[derive(Debug)]
pub struct SyntheticInsights<R = StdRng, C = SystemClock> {
    rng: R,
    clock: C,
    latency: LatencyProfile,
}

impl SyntheticInsights {
    /// Entropy-seeded generator on the system clock with default latencies
    pub fn new() -> Self {
        Self::with_parts(StdRng::from_entropy(), SystemClock, LatencyProfile::default())
    }

    /// Reproducible generator; same seed, same results
    pub fn seeded(seed: u64) -> Self {
        Self::with_parts(StdRng::seed_from_u64(seed), SystemClock, LatencyProfile::default())
    }
}

impl Default for SyntheticInsights {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng, C: Clock> SyntheticInsights<R, C> {
    pub fn with_parts(rng: R, clock: C, latency: LatencyProfile) -> Self {
        Self { rng, clock, latency }
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Swap the clock, keeping RNG state and latencies
    pub fn with_clock<C2: Clock>(self, clock: C2) -> SyntheticInsights<R, C2> {
        SyntheticInsights {
            rng: self.rng,
            clock,
            latency: self.latency,
        }
    }

    pub fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Failure risk of one machine from its four sensor channels
    pub async fn predict_failure(&mut self, reading: &SensorReading) -> MaintenancePrediction {
        simulate(self.latency.maintenance).await;
        let prediction = maintenance::predict(&mut self.rng, reading, self.clock.now());
        log::debug!(
            "maintenance: score {:.3} -> {}",
            prediction.risk_score,
            prediction.risk_level
        );
        prediction
    }

    /// Visual inspection verdict for an uploaded image
    pub async fn assess_quality(&mut self, image: &ImageHandle) -> QualityAssessment {
        simulate(self.latency.quality).await;
        let assessment = quality::assess(&mut self.rng, image);
        log::debug!(
            "quality: score {} defects {:?}",
            assessment.quality_score,
            assessment.defect_types
        );
        assessment
    }

    /// Priority-ordered, back-to-back schedule
    pub async fn optimize_schedule(&mut self, tasks: &[ScheduleTask]) -> OptimizedSchedule {
        simulate(self.latency.schedule).await;
        let schedule = schedule::optimize(&mut self.rng, tasks);
        log::debug!(
            "schedule: {} tasks, makespan {:.2}",
            schedule.optimized_schedule.len(),
            schedule.makespan()
        );
        schedule
    }

    /// Anomaly sweep over a sensor network
    pub async fn analyze_iot(&mut self, sensors: &[SensorRecord]) -> IoTAnalysis {
        simulate(self.latency.iot).await;
        let analysis = iot::analyze(&mut self.rng, sensors, self.clock.now());
        log::debug!(
            "iot: {} of {} sensors flagged",
            analysis.anomalies.len(),
            sensors.len()
        );
        analysis
    }

    /// Business summary of free text (the text itself is not analyzed)
    pub async fn generate_insights(&mut self, text: &str) -> InsightSummary {
        simulate(self.latency.insights).await;
        let summary = nlp::summarize(&mut self.rng, text, self.clock.now());
        log::debug!("insights: {}", summary.summary);
        summary
    }

    pub async fn assess_health(&mut self, sample: &HealthSample) -> HealthAssessment {
        simulate(self.latency.health).await;
        let assessment = health::assess(&mut self.rng, sample);
        log::debug!(
            "health: severity {} -> {}",
            sample.severity,
            assessment.risk_level
        );
        assessment
    }

    pub async fn analyze_blockchain(&mut self) -> BlockchainSnapshot {
        simulate(self.latency.blockchain).await;
        let snapshot = blockchain::snapshot(&mut self.rng);
        log::debug!(
            "blockchain: height {} trend {:?}",
            snapshot.network_stats.block_height,
            snapshot.trading_metrics.price_analysis.trend
        );
        snapshot
    }

    /// Next reading of a monitored patient; no latency
    pub fn drift_vitals(&mut self, vitals: &VitalSigns) -> VitalSigns {
        health::drift(&mut self.rng, vitals)
    }

    /// One refresh of the BI live strip; no latency
    pub fn business_pulse(&mut self) -> BusinessPulse {
        business::pulse(&mut self.rng, self.clock.now())
    }

    /// One tick of the crypto market ticker; no latency
    pub fn market_ticker(&mut self) -> MarketTicker {
        let tick = blockchain::ticker(&mut self.rng, self.clock.now());
        log::trace!("ticker: btc {:.2} fear/greed {}", tick.btc_price, tick.fear_greed_index);
        tick
    }

    /// The current trading signal set
    pub fn trading_signals(&self) -> Vec<TradingSignal> {
        blockchain::signals(self.clock.now())
    }

    /// Next activity-stream point; no latency
    pub fn stream_point(&mut self) -> DataPoint {
        stream::point(&mut self.rng, self.clock.now())
    }

    /// Push the next point into `window` and return a copy of it
    pub fn advance_stream(&mut self, window: &mut StreamWindow) -> StreamWindow {
        stream::advance(&mut self.rng, window, self.clock.now())
    }
}

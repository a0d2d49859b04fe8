//! Simulated inference latency
//!
//! Each capability waits a fixed delay before answering, mimicking a remote
//! model call. The delays are configuration rather than hard-coded sleeps so
//! tests and batch tools can run at zero delay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::time::*;

/// Per-capability artificial delays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyProfile {
    /// Failure prediction
    pub maintenance: Duration,
    /// Image inspection
    pub quality: Duration,
    /// Schedule optimization
    pub schedule: Duration,
    /// Sensor network sweep
    pub iot: Duration,
    /// Text summary
    pub insights: Duration,
    /// Symptom assessment
    pub health: Duration,
    /// Market snapshot
    pub blockchain: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            maintenance: Duration::from_millis(MAINTENANCE_LATENCY_MS),
            quality: Duration::from_millis(QUALITY_LATENCY_MS),
            schedule: Duration::from_millis(SCHEDULE_LATENCY_MS),
            iot: Duration::from_millis(IOT_LATENCY_MS),
            insights: Duration::from_millis(INSIGHTS_LATENCY_MS),
            health: Duration::from_millis(HEALTH_LATENCY_MS),
            blockchain: Duration::from_millis(BLOCKCHAIN_LATENCY_MS),
        }
    }
}

impl LatencyProfile {
    /// Every capability answers immediately
    pub fn instant() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// Every capability waits the same delay
    pub fn uniform(delay: Duration) -> Self {
        Self {
            maintenance: delay,
            quality: delay,
            schedule: delay,
            iot: delay,
            insights: delay,
            health: delay,
            blockchain: delay,
        }
    }

    /// Multiply every delay by `factor` (e.g. 0.5 for a snappier demo)
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |d: Duration| d.mul_f64(factor.max(0.0));
        Self {
            maintenance: scale(self.maintenance),
            quality: scale(self.quality),
            schedule: scale(self.schedule),
            iot: scale(self.iot),
            insights: scale(self.insights),
            health: scale(self.health),
            blockchain: scale(self.blockchain),
        }
    }

    /// Override the failure prediction delay
    pub fn maintenance(mut self, delay: Duration) -> Self {
        self.maintenance = delay;
        self
    }

    /// Override the inspection delay
    pub fn quality(mut self, delay: Duration) -> Self {
        self.quality = delay;
        self
    }

    /// Override the scheduling delay
    pub fn schedule(mut self, delay: Duration) -> Self {
        self.schedule = delay;
        self
    }

    /// Override the IoT delay
    pub fn iot(mut self, delay: Duration) -> Self {
        self.iot = delay;
        self
    }

    /// Override the summary delay
    pub fn insights(mut self, delay: Duration) -> Self {
        self.insights = delay;
        self
    }

    /// Override the health delay
    pub fn health(mut self, delay: Duration) -> Self {
        self.health = delay;
        self
    }

    /// Override the blockchain delay
    pub fn blockchain(mut self, delay: Duration) -> Self {
        self.blockchain = delay;
        self
    }
}

/// Wait out a simulated latency. Zero returns without yielding to the timer.
pub async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_latencies() {
        let profile = LatencyProfile::default();
        assert_eq!(profile.maintenance, Duration::from_millis(800));
        assert_eq!(profile.quality, Duration::from_millis(1200));
        assert_eq!(profile.schedule, Duration::from_millis(1800));
        assert_eq!(profile.iot, Duration::from_millis(400));
        assert_eq!(profile.insights, Duration::from_millis(600));
    }

    #[test]
    fn instant_is_all_zero() {
        assert_eq!(LatencyProfile::instant(), LatencyProfile::uniform(Duration::ZERO));
    }

    #[test]
    fn scaling_halves_delays() {
        let profile = LatencyProfile::default().scaled(0.5);
        assert_eq!(profile.maintenance, Duration::from_millis(400));
        assert_eq!(profile.schedule, Duration::from_millis(900));
    }

    #[tokio::test(start_paused = true)]
    async fn simulate_waits_configured_delay() {
        let start = tokio::time::Instant::now();
        simulate(Duration::from_millis(800)).await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_does_not_advance_time() {
        let start = tokio::time::Instant::now();
        simulate(Duration::ZERO).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

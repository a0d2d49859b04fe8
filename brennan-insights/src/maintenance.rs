//! Equipment failure prediction
//!
//! The risk level, failure horizon and recommendation set all follow the
//! weighted risk score of the reading; only the confidence and the echoed
//! metrics are random.

use brennan_core::constants::maintenance::{
    CONFIDENCE_BAND, CONFIDENCE_DRAW, EFFICIENCY_CEILING, EFFICIENCY_PER_RISK,
};
use brennan_core::time::{days, Timestamp};
use brennan_core::{MaintenanceMetrics, MaintenancePrediction, RiskLevel, SensorReading};
use rand::Rng;

use crate::scoring::Draw;

/// Build a prediction for `reading` as of `now`
pub fn predict<R: Rng + ?Sized>(rng: &mut R, reading: &SensorReading, now: Timestamp) -> MaintenancePrediction {
    let risk_score = reading.risk_score();
    let risk_level = RiskLevel::from_score(risk_score);

    let confidence = rng
        .in_band(CONFIDENCE_DRAW)
        .clamp(CONFIDENCE_BAND.min(), CONFIDENCE_BAND.max());

    MaintenancePrediction {
        risk_level,
        risk_score,
        confidence,
        predicted_failure_date: now + days(risk_level.horizon_days() as f64),
        maintenance_recommendations: risk_level
            .recommendations()
            .iter()
            .map(|r| r.to_string())
            .collect(),
        real_time_metrics: MaintenanceMetrics {
            efficiency: (EFFICIENCY_CEILING - risk_score * EFFICIENCY_PER_RISK).round() as i64,
            temperature: reading.temperature,
            vibration_level: reading.vibration,
            last_updated: now,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brennan_core::{Clock, FixedClock};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day_millis(days: i64) -> i64 {
        days * 24 * 60 * 60 * 1000
    }

    #[test]
    fn high_risk_reading() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = FixedClock::from_millis(1_700_000_000_000).now();
        let prediction = predict(&mut rng, &SensorReading::new(100.0, 100.0, 16.5, 80.0), now);

        assert_eq!(prediction.risk_level, RiskLevel::High);
        assert_eq!(
            (prediction.predicted_failure_date - now).num_milliseconds(),
            day_millis(3)
        );
        assert_eq!(prediction.maintenance_recommendations[0], "Critical: Immediate shutdown required");
    }

    #[test]
    fn medium_and_low_horizons() {
        let mut rng = StdRng::seed_from_u64(2);
        let now = FixedClock::from_millis(0).now();

        let medium = predict(&mut rng, &SensorReading::new(50.0, 50.0, 50.0, 50.0), now);
        assert_eq!(medium.risk_level, RiskLevel::Medium);
        assert_eq!((medium.predicted_failure_date - now).num_milliseconds(), day_millis(14));

        let low = predict(&mut rng, &SensorReading::new(10.0, 10.0, 10.0, 10.0), now);
        assert_eq!(low.risk_level, RiskLevel::Low);
        assert_eq!((low.predicted_failure_date - now).num_milliseconds(), day_millis(60));
        assert_eq!(low.maintenance_recommendations[0], "Continue normal operation");
    }

    #[test]
    fn efficiency_tracks_risk() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = FixedClock::from_millis(0).now();
        let prediction = predict(&mut rng, &SensorReading::new(50.0, 50.0, 50.0, 50.0), now);
        // risk 0.5 -> 95 - 10
        assert_eq!(prediction.real_time_metrics.efficiency, 85);
        assert_eq!(prediction.real_time_metrics.vibration_level, 50.0);
        assert_eq!(prediction.real_time_metrics.last_updated, now);
    }
}

//! Sensor network anomaly flagging
//!
//! Each record is flagged on its own draw (15% rate) regardless of its value.
//! A flagged record then draws a severity and a confidence.

use brennan_core::constants::iot::*;
use brennan_core::time::{days, Timestamp};
use brennan_core::{Anomaly, IoTAnalysis, IoTPredictions, MlMetrics, SensorRecord, Severity};
use rand::Rng;

use crate::scoring::Draw;

/// Map a unit draw onto a severity: `> 0.6` high, `> 0.3` medium, else low
pub fn severity_for(draw: f64) -> Severity {
    if draw > HIGH_SEVERITY_CUTOFF {
        Severity::High
    } else if draw > MEDIUM_SEVERITY_CUTOFF {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Scan `sensors` as of `now`
pub fn analyze<R: Rng + ?Sized>(rng: &mut R, sensors: &[SensorRecord], now: Timestamp) -> IoTAnalysis {
    let mut anomalies = Vec::new();
    for sensor in sensors {
        if !rng.exceeds(ANOMALY_THRESHOLD) {
            continue;
        }
        anomalies.push(Anomaly {
            sensor: sensor.id.clone(),
            kind: sensor.kind.clone(),
            anomaly: ANOMALY_DESCRIPTION.to_string(),
            severity: severity_for(rng.unit()),
            confidence: rng.rounded(ANOMALY_CONFIDENCE_BAND),
        });
    }

    let predictions = IoTPredictions {
        next_maintenance: now + days(rng.in_band(NEXT_MAINTENANCE_DAYS_BAND)),
        efficiency_forecast: rng.rounded(EFFICIENCY_FORECAST_BAND),
        energy_optimization: format!("{}% reduction achievable", rng.rounded(ENERGY_REDUCTION_BAND)),
        cost_savings: format!("${}/month", rng.rounded(MONTHLY_SAVINGS_BAND)),
    };

    IoTAnalysis {
        anomalies,
        predictions,
        real_time_insights: REAL_TIME_INSIGHTS.iter().map(|s| s.to_string()).collect(),
        ml_metrics: MlMetrics {
            prediction_accuracy: rng.rounded(PREDICTION_ACCURACY_BAND),
            data_processing_rate: format!("{} events/sec", rng.rounded(PROCESSING_RATE_BAND)),
            model_training_efficiency: rng.rounded(TRAINING_EFFICIENCY_BAND),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brennan_core::{Clock, FixedClock};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn severity_cutoffs() {
        assert_eq!(severity_for(0.61), Severity::High);
        assert_eq!(severity_for(0.6), Severity::Medium);
        assert_eq!(severity_for(0.31), Severity::Medium);
        assert_eq!(severity_for(0.3), Severity::Low);
        assert_eq!(severity_for(0.0), Severity::Low);
    }

    #[test]
    fn empty_network_has_no_anomalies() {
        let mut rng = StdRng::seed_from_u64(9);
        let analysis = analyze(&mut rng, &[], FixedClock::from_millis(0).now());
        assert!(analysis.anomalies.is_empty());
        assert_eq!(analysis.real_time_insights.len(), 4);
    }

    #[test]
    fn next_maintenance_within_window() {
        let mut rng = StdRng::seed_from_u64(10);
        let now = FixedClock::from_millis(0).now();
        for _ in 0..200 {
            let analysis = analyze(&mut rng, &[SensorRecord::new("t-1", 20.0, "temperature")], now);
            let ahead = (analysis.predictions.next_maintenance - now).num_milliseconds();
            assert!(ahead >= 10 * 86_400_000 && ahead <= 20 * 86_400_000);
        }
    }

    #[test]
    fn anomaly_rate_near_fifteen_percent() {
        let mut rng = StdRng::seed_from_u64(12);
        let sensors: Vec<_> = (0..2_000)
            .map(|i| SensorRecord::new(format!("sensor-{i}"), 50.0, "vibration"))
            .collect();
        let analysis = analyze(&mut rng, &sensors, FixedClock::from_millis(0).now());
        let count = analysis.anomalies.len();
        assert!((200..400).contains(&count), "count = {count}");
    }
}

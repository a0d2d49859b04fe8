//! Invariants that hold for every input and every seed

mod common;

use brennan_core::{Recommendation, RiskLevel, ScheduleTask, SensorReading};
use brennan_insights::schedule::pack;
use proptest::prelude::*;

use common::{engine, DAY_MS};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
        .block_on(future)
}

fn channel() -> impl Strategy<Value = f64> {
    -50.0..150.0f64
}

fn task() -> impl Strategy<Value = ScheduleTask> {
    ("[a-z]{1,6}", 0.0..100.0f64, -5..10i32)
        .prop_map(|(id, duration, priority)| ScheduleTask::new(id, duration, priority))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn risk_level_and_horizon_follow_score(
        vibration in channel(),
        temperature in channel(),
        pressure in channel(),
        acoustics in channel(),
        seed in any::<u64>(),
    ) {
        let reading = SensorReading::new(vibration, temperature, pressure, acoustics);
        let prediction = block_on(engine(seed).predict_failure(&reading));

        let score = reading.risk_score();
        let (level, days) = if score > 0.7 {
            (RiskLevel::High, 3)
        } else if score > 0.4 {
            (RiskLevel::Medium, 14)
        } else {
            (RiskLevel::Low, 60)
        };
        prop_assert_eq!(prediction.risk_level, level);
        prop_assert!((prediction.risk_score - score).abs() < 1e-12);

        let now = prediction.real_time_metrics.last_updated;
        prop_assert_eq!((prediction.predicted_failure_date - now).num_milliseconds(), days * DAY_MS);
        prop_assert!((85.0..=98.0).contains(&prediction.confidence));
        prop_assert_eq!(prediction.maintenance_recommendations.len(), 3);
    }

    #[test]
    fn schedule_is_a_priority_ordered_packing(
        tasks in prop::collection::vec(task(), 0..20),
    ) {
        let packed = pack(&tasks);
        prop_assert_eq!(packed.len(), tasks.len());

        let mut cursor = 0.0;
        for pair in packed.windows(2) {
            prop_assert!(pair[0].task.priority >= pair[1].task.priority);
        }
        for slot in &packed {
            prop_assert!((slot.start_time - cursor).abs() < 1e-9);
            prop_assert!((slot.end_time - slot.start_time - slot.task.duration * 0.8).abs() < 1e-9);
            prop_assert!(slot.quantum_optimized);
            cursor = slot.end_time;
        }

        // same multiset of ids
        let mut before: Vec<_> = tasks.iter().map(|t| t.id.clone()).collect();
        let mut after: Vec<_> = packed.iter().map(|t| t.task.id.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn quality_verdict_is_consistent(seed in any::<u64>()) {
        let result = block_on(engine(seed).assess_quality(&brennan_core::ImageHandle::sample()));
        prop_assert_eq!(result.defects_detected, !result.defect_types.is_empty());
        prop_assert_eq!(
            result.recommendation,
            if result.defects_detected { Recommendation::ManualReview } else { Recommendation::Accept }
        );
        prop_assert!((85..=98).contains(&result.quality_score));
        prop_assert!((94..=99).contains(&result.confidence));
        prop_assert!(result.defect_types.len() <= 3);
    }

    #[test]
    fn iot_anomalies_reference_input_sensors(
        count in 0usize..60,
        seed in any::<u64>(),
    ) {
        let sensors = common::sensor_network(count);
        let analysis = block_on(engine(seed).analyze_iot(&sensors));

        prop_assert!(analysis.anomalies.len() <= sensors.len());
        for anomaly in &analysis.anomalies {
            let source = sensors.iter().find(|s| s.id == anomaly.sensor);
            prop_assert!(source.is_some());
            prop_assert_eq!(&anomaly.kind, &source.unwrap().kind);
            prop_assert!((85..=98).contains(&anomaly.confidence));
        }
        prop_assert!((92..=98).contains(&analysis.predictions.efficiency_forecast));
    }
}

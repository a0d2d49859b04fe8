//! Concrete dashboard scenarios

mod common;

use std::sync::Arc;
use std::time::Duration;

use brennan_core::constants::nlp::SUMMARY_POOL;
use brennan_core::{HealthSample, RiskLevel, SensorReading, StreamWindow, VitalSigns};
use brennan_insights::nlp;
use brennan_insights::{Capability, LiveBoard};
use tokio::sync::Mutex;

use common::{demo_tasks, engine, slow_engine, DAY_MS};

#[tokio::test]
async fn severe_machine_is_high_risk() {
    let mut engine = engine(1);
    let reading = SensorReading::new(95.0, 88.0, 70.0, 80.0);
    let prediction = engine.predict_failure(&reading).await;

    // 0.285 + 0.22 + 0.175 + 0.16
    assert!((prediction.risk_score - 0.84).abs() < 1e-9);
    assert_eq!(prediction.risk_level, RiskLevel::High);
    let ahead = prediction.predicted_failure_date - prediction.real_time_metrics.last_updated;
    assert_eq!(ahead.num_milliseconds(), 3 * DAY_MS);
}

#[tokio::test]
async fn borderline_reading_stays_high() {
    let mut engine = engine(2);
    let reading = SensorReading::new(100.0, 100.0, 16.5, 80.0);
    let prediction = engine.predict_failure(&reading).await;

    // 0.30 + 0.25 + 0.04125 + 0.16
    assert!((prediction.risk_score - 0.75125).abs() < 1e-9);
    assert_eq!(prediction.risk_level, RiskLevel::High);
    assert_eq!(
        (prediction.predicted_failure_date - prediction.real_time_metrics.last_updated).num_milliseconds(),
        3 * DAY_MS
    );
}

#[tokio::test]
async fn demo_schedule_is_packed_back_to_back() {
    let mut engine = engine(3);
    let schedule = engine.optimize_schedule(&demo_tasks()).await;

    let slots: Vec<_> = schedule
        .optimized_schedule
        .iter()
        .map(|t| (t.task.id.as_str(), t.start_time, t.end_time))
        .collect();
    let expected = [("C", 0.0, 0.8), ("A", 0.8, 2.4), ("B", 2.4, 4.8)];
    for ((id, start, end), (want_id, want_start, want_end)) in slots.iter().zip(expected) {
        assert_eq!(*id, want_id);
        assert!((start - want_start).abs() < 1e-9);
        assert!((end - want_end).abs() < 1e-9);
    }
    assert_eq!(
        schedule.processing_method,
        "Quantum Approximate Optimization Algorithm (QAOA) v2.0"
    );
}

#[tokio::test]
async fn empty_inputs_are_accepted() {
    let mut engine = engine(4);
    assert!(engine.optimize_schedule(&[]).await.optimized_schedule.is_empty());
    assert!(engine.analyze_iot(&[]).await.anomalies.is_empty());
    let insight = engine.generate_insights("").await;
    assert!(SUMMARY_POOL.contains(&insight.summary.as_str()));
}

#[tokio::test]
async fn same_seed_same_results() {
    let mut a = engine(99);
    let mut b = engine(99);
    assert_eq!(a.analyze_blockchain().await, b.analyze_blockchain().await);
    assert_eq!(
        a.generate_insights("q3 report").await,
        b.generate_insights("q3 report").await
    );
    assert_eq!(
        a.drift_vitals(&VitalSigns::default()),
        b.drift_vitals(&VitalSigns::default())
    );
}

#[tokio::test]
async fn health_triage_by_severity() {
    let mut engine = engine(5);
    let mild = engine.assess_health(&HealthSample::new("headache", 3, 4, 98.6)).await;
    let moderate = engine.assess_health(&HealthSample::new("cough", 5, 48, 99.5)).await;
    let severe = engine.assess_health(&HealthSample::new("chest pain", 10, 1, 100.2)).await;

    assert_eq!(mild.risk_level, RiskLevel::Low);
    assert_eq!(moderate.risk_level, RiskLevel::Medium);
    assert_eq!(severe.risk_level, RiskLevel::High);
    assert!(mild.emergency_indicators.is_empty());
    assert_eq!(severe.emergency_indicators.len(), 1);
}

#[test]
fn summaries_are_independent_of_text() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let now = brennan_core::time::Clock::now(&brennan_core::FixedClock::from_millis(0));
    let a = nlp::summarize(&mut StdRng::seed_from_u64(1), "revenue fell", now);
    let b = nlp::summarize(&mut StdRng::seed_from_u64(1), "revenue rose", now);
    assert_eq!(a.summary, b.summary);
}

#[tokio::test(start_paused = true)]
async fn each_capability_waits_its_latency() {
    let mut engine = slow_engine(6);

    let start = tokio::time::Instant::now();
    engine.predict_failure(&SensorReading::new(1.0, 1.0, 1.0, 1.0)).await;
    assert_eq!(start.elapsed(), Duration::from_millis(800));

    let start = tokio::time::Instant::now();
    engine.optimize_schedule(&demo_tasks()).await;
    assert_eq!(start.elapsed(), Duration::from_millis(1800));

    let start = tokio::time::Instant::now();
    engine.analyze_iot(&[]).await;
    assert_eq!(start.elapsed(), Duration::from_millis(400));

    let start = tokio::time::Instant::now();
    engine.drift_vitals(&VitalSigns::default());
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn live_iot_panel_refreshes_every_three_seconds() {
    let shared = Arc::new(Mutex::new(slow_engine(7)));
    let sensors = common::sensor_network(12);

    let mut board = LiveBoard::new();
    let engine = Arc::clone(&shared);
    let poller = board
        .start(Capability::Iot, Duration::from_secs(3), move || {
            let engine = Arc::clone(&engine);
            let sensors = sensors.clone();
            async move { engine.lock().await.analyze_iot(&sensors).await }
        })
        .unwrap();

    let start = tokio::time::Instant::now();
    let first = poller.next_frame().await.unwrap();
    // one period plus the 400 ms the capability itself takes
    assert_eq!(start.elapsed(), Duration::from_millis(3_400));
    assert_eq!(first.tick, 1);
    assert_eq!(first.data.real_time_insights.len(), 4);

    let second = poller.next_frame().await.unwrap();
    assert_eq!(second.tick, 2);

    board.stop();
    assert!(board.poller().is_none());
}

#[tokio::test(start_paused = true)]
async fn live_stream_keeps_a_bounded_window() {
    let feed = Arc::new(Mutex::new((slow_engine(5), StreamWindow::default())));

    let mut board = LiveBoard::new();
    let source = Arc::clone(&feed);
    let poller = board
        .start(Capability::Stream, Capability::Stream.refresh_period(), move || {
            let source = Arc::clone(&source);
            async move {
                let mut guard = source.lock().await;
                let (engine, window) = &mut *guard;
                engine.advance_stream(window)
            }
        })
        .unwrap();

    let start = tokio::time::Instant::now();
    let first = poller.next_frame().await.unwrap();
    assert_eq!(start.elapsed(), Duration::from_secs(1));
    assert_eq!(first.data.len(), 1);

    let mut last = first;
    for _ in 0..29 {
        last = poller.next_frame().await.unwrap();
    }
    assert_eq!(last.tick, 30);
    assert_eq!(last.data.len(), 21);
    assert!(last.data.iter().all(|p| (0.0..100.0).contains(&p.value)));
    board.stop();
}

#[tokio::test(start_paused = true)]
async fn business_and_ticker_feeds_skip_latency() {
    let mut engine = slow_engine(9);
    let start = tokio::time::Instant::now();

    let pulse = engine.business_pulse();
    assert_in_range!(pulse.live_users, 2_000..3_000);
    assert_in_range!(pulse.system_load, 65..85);

    let tick = engine.market_ticker();
    assert_in_range!(tick.fear_greed_index, 65..85);
    assert_eq!(engine.trading_signals().len(), 3);
    assert_eq!(pulse.timestamp.timestamp_millis(), common::EPOCH_MS);

    assert_eq!(start.elapsed(), Duration::ZERO);
}

//! Brennan Predictive Maintenance Example
//!
//! Runs every dashboard capability once against sample inputs and prints the
//! results as the dashboards would render them.
//!
//! ## Scenario: Stamping Line Walkthrough
//!
//! Three presses report sensor channels at different wear levels. The
//! maintenance panel rates each one, then the remaining panels run on the
//! same engine.
//!
//! ```text
//! cargo run -p brennan-insights --example 01_predictive_maintenance
//! ```

use brennan_core::{ImageHandle, LatencyProfile, ScheduleTask, SensorReading, SensorRecord};
use brennan_insights::SyntheticInsights;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Brennan Predictive Maintenance Example ===\n");

    // Seeded so repeated runs print the same numbers; latencies shortened
    let mut engine = SyntheticInsights::seeded(42).with_latency(LatencyProfile::default().scaled(0.25));

    let presses = [
        ("press-1", SensorReading::new(20.0, 35.0, 30.0, 25.0)),
        ("press-2", SensorReading::new(55.0, 60.0, 40.0, 50.0)),
        ("press-3", SensorReading::new(100.0, 100.0, 16.5, 80.0)),
    ];

    println!("Maintenance");
    println!("===========");
    for (name, reading) in &presses {
        let prediction = engine.predict_failure(reading).await;
        println!(
            "{name}: {} (score {:.3}, confidence {:.1}%) fail by {}",
            prediction.risk_level,
            prediction.risk_score,
            prediction.confidence,
            prediction.predicted_failure_date.format("%Y-%m-%d")
        );
        println!("  -> {}", prediction.maintenance_recommendations[0]);
    }

    println!("\nQuality");
    println!("=======");
    let inspection = engine.assess_quality(&ImageHandle::sample()).await;
    println!(
        "score {} / {:?} defects: {:?}",
        inspection.quality_score, inspection.recommendation, inspection.defect_types
    );

    println!("\nSchedule");
    println!("========");
    let tasks = [
        ScheduleTask::new("weld", 2.0, 8),
        ScheduleTask::new("paint", 3.0, 6),
        ScheduleTask::new("inspect", 1.0, 9),
    ];
    let schedule = engine.optimize_schedule(&tasks).await;
    for slot in &schedule.optimized_schedule {
        println!("{:>8}: {:.1}h - {:.1}h", slot.task.id, slot.start_time, slot.end_time);
    }
    println!("{}", schedule.quantum_advantage);

    println!("\nIoT");
    println!("===");
    let sensors: Vec<_> = (0..20)
        .map(|i| SensorRecord::new(format!("line-{i:02}"), 40.0, "vibration"))
        .collect();
    let analysis = engine.analyze_iot(&sensors).await;
    for anomaly in &analysis.anomalies {
        println!("{} {} ({:?}, {}%)", anomaly.sensor, anomaly.anomaly, anomaly.severity, anomaly.confidence);
    }
    println!("{} of {} sensors flagged", analysis.anomalies.len(), sensors.len());

    println!("\nInsights");
    println!("========");
    let insight = engine.generate_insights("Quarterly production report").await;
    println!("{}", insight.summary);

    match serde_json::to_string_pretty(&insight.key_metrics) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("could not render metrics: {err}"),
    }

    println!("\nDone.");
}

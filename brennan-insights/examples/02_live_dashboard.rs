//! Brennan Live Dashboard Example
//!
//! Puts the IoT panel into live mode, switches the display to the health
//! monitor, then to the business strip, then stops.
//!
//! ```text
//! cargo run -p brennan-insights --example 02_live_dashboard
//! ```

use std::sync::Arc;
use std::time::Duration;

use brennan_core::{BusinessPulse, LatencyProfile, SensorRecord, VitalSigns};
use brennan_insights::{Capability, LiveBoard, SyntheticInsights};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
enum Panel {
    Iot { flagged: usize, forecast: u32 },
    Vitals(VitalSigns),
    Business(BusinessPulse),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Brennan Live Dashboard Example ===\n");

    let engine = Arc::new(Mutex::new(
        SyntheticInsights::seeded(7).with_latency(LatencyProfile::instant()),
    ));
    let period = Duration::from_millis(300);
    let mut board = LiveBoard::new();

    let sensors: Vec<_> = (0..8)
        .map(|i| SensorRecord::new(format!("hvac-{i}"), 21.5, "temperature"))
        .collect();
    let iot_engine = Arc::clone(&engine);
    if let Err(err) = board.start(Capability::Iot, period, move || {
        let engine = Arc::clone(&iot_engine);
        let sensors = sensors.clone();
        async move {
            let analysis = engine.lock().await.analyze_iot(&sensors).await;
            Panel::Iot {
                flagged: analysis.anomalies.len(),
                forecast: analysis.predictions.efficiency_forecast,
            }
        }
    }) {
        eprintln!("{err}");
        return;
    }
    render(&mut board, 3).await;

    // Insights has no live mode
    if let Err(err) = board.start(Capability::Insights, period, || async { Panel::Iot { flagged: 0, forecast: 0 } }) {
        println!("refused: {err}\n");
    }

    let vitals_engine = Arc::clone(&engine);
    let vitals = Arc::new(Mutex::new(VitalSigns::default()));
    let started = board.start(Capability::Health, period, move || {
        let engine = Arc::clone(&vitals_engine);
        let vitals = Arc::clone(&vitals);
        async move {
            let mut current = vitals.lock().await;
            let next = engine.lock().await.drift_vitals(&current);
            *current = next;
            Panel::Vitals(*current)
        }
    });
    if started.is_ok() {
        render(&mut board, 3).await;
    }

    let business_engine = Arc::clone(&engine);
    let started = board.start(Capability::Business, period, move || {
        let engine = Arc::clone(&business_engine);
        async move { Panel::Business(engine.lock().await.business_pulse()) }
    });
    if started.is_ok() {
        render(&mut board, 2).await;
    }

    board.stop();
    println!("Live mode off.");
}

async fn render(board: &mut LiveBoard<Panel>, frames: usize) {
    let Some(capability) = board.capability() else {
        return;
    };
    println!("Live: {capability}");
    for _ in 0..frames {
        let Some(frame) = (match board.poller() {
            Some(poller) => poller.next_frame().await,
            None => None,
        }) else {
            break;
        };
        match frame.data {
            Panel::Iot { flagged, forecast } => {
                println!("  #{} {} flagged, forecast {}%", frame.tick, flagged, forecast)
            }
            Panel::Vitals(v) => println!(
                "  #{} HR {:.0} BP {:.0}/{:.0} SpO2 {:.1}%",
                frame.tick, v.heart_rate, v.blood_pressure.systolic, v.blood_pressure.diastolic, v.oxygen_saturation
            ),
            Panel::Business(pulse) => println!(
                "  #{} {} users, ${} revenue, load {}%\n     {}",
                frame.tick, pulse.live_users, pulse.current_revenue, pulse.system_load, pulse.headline
            ),
        }
    }
    println!();
}

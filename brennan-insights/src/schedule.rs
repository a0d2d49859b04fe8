//! Priority packing of tasks
//!
//! Not a real optimizer: tasks are stable-sorted by descending priority and
//! laid end to end from time 0, each slot compressed to 80% of the task
//! duration. Overlaps and shared resources are never considered.

use brennan_core::constants::schedule::*;
use brennan_core::{OptimizedSchedule, OptimizedTask, QuantumMetrics, ScheduleTask};
use rand::Rng;

use crate::scoring::{round_to, Draw};

/// Order and pack `tasks`
///
/// The output has one entry per input task. Ties in priority keep their
/// input order.
pub fn pack(tasks: &[ScheduleTask]) -> Vec<OptimizedTask> {
    let mut ordered = tasks.to_vec();
    // sort_by is stable
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut cursor = 0.0;
    ordered
        .into_iter()
        .map(|task| {
            let start_time = cursor;
            cursor += task.duration * SLOT_COMPRESSION;
            OptimizedTask {
                task,
                start_time,
                end_time: cursor,
                quantum_optimized: true,
            }
        })
        .collect()
}

/// Pack `tasks` and attach presentation metrics
pub fn optimize<R: Rng + ?Sized>(rng: &mut R, tasks: &[ScheduleTask]) -> OptimizedSchedule {
    OptimizedSchedule {
        optimized_schedule: pack(tasks),
        efficiency_improvement: rng.rounded(EFFICIENCY_IMPROVEMENT_BAND),
        processing_method: PROCESSING_METHOD.to_string(),
        quantum_advantage: format!(
            "{}x faster than classical methods",
            rng.rounded(QUANTUM_SPEEDUP_BAND)
        ),
        real_time_metrics: QuantumMetrics {
            quantum_coherence: rng.rounded(COHERENCE_BAND),
            error_correction: round_to(rng.in_band(ERROR_CORRECTION_BAND), 1),
            entanglement_rate: rng.rounded(ENTANGLEMENT_BAND),
        },
    }
}

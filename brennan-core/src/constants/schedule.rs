//! Schedule "Optimization"
//!
//! Tasks are packed back to back in priority order. Every slot is the task
//! duration multiplied by [`SLOT_COMPRESSION`]; no resource constraint is
//! checked.

use super::Band;

/// Fraction of a task's duration its slot occupies.
pub const SLOT_COMPRESSION: f64 = 0.8;

/// Reported efficiency improvement, in percent.
pub const EFFICIENCY_IMPROVEMENT_BAND: Band = Band::new(35.0, 25.0);

/// Fixed description of the solving method.
pub const PROCESSING_METHOD: &str = "Quantum Approximate Optimization Algorithm (QAOA) v2.0";

/// Speed-up multiplier quoted in the quantum advantage string.
pub const QUANTUM_SPEEDUP_BAND: Band = Band::new(2000.0, 1000.0);

/// Quantum coherence band.
pub const COHERENCE_BAND: Band = Band::new(85.0, 12.0);

/// Error correction band (reported to one decimal place).
pub const ERROR_CORRECTION_BAND: Band = Band::new(99.5, 0.4);

/// Entanglement rate band.
pub const ENTANGLEMENT_BAND: Band = Band::new(92.0, 6.0);

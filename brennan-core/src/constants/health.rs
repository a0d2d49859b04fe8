//! Health Assessment and Vital Signs
//!
//! Risk follows the self-reported severity (1-10). Vital signs drift by a
//! bounded random walk clamped to resting adult ranges.

use super::Band;

/// Severities strictly above this are `HIGH` risk.
pub const HIGH_SEVERITY: u8 = 7;

/// Severities strictly above this (and not `HIGH`) are `MEDIUM` risk.
pub const MEDIUM_SEVERITY: u8 = 4;

/// Severities strictly above this raise an emergency indicator.
pub const EMERGENCY_SEVERITY: u8 = 8;

/// Emergency indicator text.
pub const EMERGENCY_INDICATOR: &str = "Seek immediate medical attention";

/// Assessment confidence band.
pub const CONFIDENCE_BAND: Band = Band::new(85.0, 10.0);

/// Longest predicted recovery, in days (shortest is 1).
pub const MAX_RECOVERY_DAYS: u32 = 7;

/// Fixed recommendations.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Monitor symptoms closely",
    "Stay hydrated",
    "Rest as needed",
    "Consult healthcare provider if symptoms worsen",
];

// ===== VITAL SIGN LIMITS =====

/// Heart rate limits (bpm).
pub const HEART_RATE_LIMITS: (f64, f64) = (60.0, 100.0);

/// Largest heart rate step per drift.
pub const HEART_RATE_STEP: f64 = 5.0;

/// Systolic pressure limits (mmHg).
pub const SYSTOLIC_LIMITS: (f64, f64) = (90.0, 140.0);

/// Largest systolic step per drift.
pub const SYSTOLIC_STEP: f64 = 8.0;

/// Diastolic pressure limits (mmHg).
pub const DIASTOLIC_LIMITS: (f64, f64) = (60.0, 90.0);

/// Largest diastolic step per drift.
pub const DIASTOLIC_STEP: f64 = 4.0;

/// Body temperature limits (°F).
pub const BODY_TEMPERATURE_LIMITS: (f64, f64) = (97.0, 101.0);

/// Largest temperature step per drift.
pub const BODY_TEMPERATURE_STEP: f64 = 0.5;

/// Oxygen saturation limits (%).
pub const OXYGEN_LIMITS: (f64, f64) = (95.0, 100.0);

/// Largest oxygen saturation step per drift.
pub const OXYGEN_STEP: f64 = 2.0;

/// Respiratory rate limits (breaths per minute).
pub const RESPIRATORY_LIMITS: (f64, f64) = (12.0, 20.0);

/// Largest respiratory step per drift.
pub const RESPIRATORY_STEP: f64 = 2.0;

//! Health assistant triage and vital-sign simulation

use brennan_core::constants::health::*;
use brennan_core::{BloodPressure, HealthAssessment, HealthSample, VitalSigns};
use rand::Rng;

use crate::scoring::Draw;

/// Triage a self-reported symptom
pub fn assess<R: Rng + ?Sized>(rng: &mut R, sample: &HealthSample) -> HealthAssessment {
    let emergency_indicators = if sample.severity > EMERGENCY_SEVERITY {
        vec![EMERGENCY_INDICATOR.to_string()]
    } else {
        Vec::new()
    };

    HealthAssessment {
        risk_level: sample.risk_level(),
        confidence: rng.rounded(CONFIDENCE_BAND),
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        emergency_indicators,
        predicted_recovery: format!("{} days", rng.gen_range(1..=MAX_RECOVERY_DAYS)),
    }
}

fn step<R: Rng + ?Sized>(rng: &mut R, value: f64, span: f64, (low, high): (f64, f64)) -> f64 {
    (value + rng.jitter(span)).clamp(low, high)
}

/// One random-walk step of every vital sign, clamped to resting limits
pub fn drift<R: Rng + ?Sized>(rng: &mut R, vitals: &VitalSigns) -> VitalSigns {
    VitalSigns {
        heart_rate: step(rng, vitals.heart_rate, HEART_RATE_STEP, HEART_RATE_LIMITS),
        blood_pressure: BloodPressure {
            systolic: step(rng, vitals.blood_pressure.systolic, SYSTOLIC_STEP, SYSTOLIC_LIMITS),
            diastolic: step(rng, vitals.blood_pressure.diastolic, DIASTOLIC_STEP, DIASTOLIC_LIMITS),
        },
        temperature: step(rng, vitals.temperature, BODY_TEMPERATURE_STEP, BODY_TEMPERATURE_LIMITS),
        oxygen_saturation: step(rng, vitals.oxygen_saturation, OXYGEN_STEP, OXYGEN_LIMITS),
        respiratory_rate: step(rng, vitals.respiratory_rate, RESPIRATORY_STEP, RESPIRATORY_LIMITS),
    }
}

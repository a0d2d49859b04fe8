//! Health assistant input, assessment and vital signs

use serde::{Deserialize, Serialize};

use super::RiskLevel;
use crate::constants::health::{HIGH_SEVERITY, MEDIUM_SEVERITY};

/// Self-reported symptom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSample {
    /// Free-text complaint
    pub symptom: String,
    /// 1 (mild) to 10 (severe)
    pub severity: u8,
    /// How long it has lasted
    pub duration_hours: u32,
    /// Body temperature, °F
    pub temperature_f: f64,
}

impl HealthSample {
    /// Sample from its four fields
    pub fn new(symptom: impl Into<String>, severity: u8, duration_hours: u32, temperature_f: f64) -> Self {
        Self {
            symptom: symptom.into(),
            severity,
            duration_hours,
            temperature_f,
        }
    }

    /// `> 7` high, `> 4` medium, else low
    pub fn risk_level(&self) -> RiskLevel {
        if self.severity > HIGH_SEVERITY {
            RiskLevel::High
        } else if self.severity > MEDIUM_SEVERITY {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Triage-style response to a [`HealthSample`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    /// From severity alone
    pub risk_level: RiskLevel,
    /// In `[85, 95]`
    pub confidence: u32,
    /// Fixed care advice
    pub recommendations: Vec<String>,
    /// Non-empty iff severity is above 8
    pub emergency_indicators: Vec<String>,
    /// `"<1-7> days"`
    pub predicted_recovery: String,
}

/// Monitored vital signs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    /// Beats per minute
    pub heart_rate: f64,
    /// mmHg
    pub blood_pressure: BloodPressure,
    /// °F
    pub temperature: f64,
    /// Percent
    pub oxygen_saturation: f64,
    /// Breaths per minute
    pub respiratory_rate: f64,
}

/// Arterial pressure pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Upper reading
    pub systolic: f64,
    /// Lower reading
    pub diastolic: f64,
}

impl Default for VitalSigns {
    /// Resting adult baseline
    fn default() -> Self {
        Self {
            heart_rate: 72.0,
            blood_pressure: BloodPressure {
                systolic: 120.0,
                diastolic: 80.0,
            },
            temperature: 98.6,
            oxygen_saturation: 98.0,
            respiratory_rate: 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_cutoffs() {
        assert_eq!(HealthSample::new("fever", 8, 12, 100.1).risk_level(), RiskLevel::High);
        assert_eq!(HealthSample::new("fever", 7, 12, 100.1).risk_level(), RiskLevel::Medium);
        assert_eq!(HealthSample::new("fever", 5, 12, 100.1).risk_level(), RiskLevel::Medium);
        assert_eq!(HealthSample::new("fever", 4, 12, 100.1).risk_level(), RiskLevel::Low);
    }
}

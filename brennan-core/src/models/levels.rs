//! Discrete levels derived from scores or draws

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::maintenance::{
    HIGH_RISK_HORIZON_DAYS, HIGH_RISK_RECOMMENDATIONS, HIGH_RISK_THRESHOLD,
    LOW_RISK_HORIZON_DAYS, LOW_RISK_RECOMMENDATIONS, MEDIUM_RISK_HORIZON_DAYS,
    MEDIUM_RISK_RECOMMENDATIONS, MEDIUM_RISK_THRESHOLD,
};

/// Three-way risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Below the medium cutoff
    Low,
    /// Above the medium cutoff
    Medium,
    /// Above the high cutoff
    High,
}

/// Anomaly severity uses the same three levels
pub type Severity = RiskLevel;

impl RiskLevel {
    /// Classify a maintenance risk score: `> 0.7` high, `> 0.4` medium, else low
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Days until predicted failure at this level
    pub const fn horizon_days(&self) -> i64 {
        match self {
            RiskLevel::High => HIGH_RISK_HORIZON_DAYS,
            RiskLevel::Medium => MEDIUM_RISK_HORIZON_DAYS,
            RiskLevel::Low => LOW_RISK_HORIZON_DAYS,
        }
    }

    /// Ordered maintenance recommendations at this level
    pub const fn recommendations(&self) -> &'static [&'static str; 3] {
        match self {
            RiskLevel::High => &HIGH_RISK_RECOMMENDATIONS,
            RiskLevel::Medium => &MEDIUM_RISK_RECOMMENDATIONS,
            RiskLevel::Low => &LOW_RISK_RECOMMENDATIONS,
        }
    }

    /// Upper-case wire name
    pub const fn name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Disposition of an inspected part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    /// Ship the part
    Accept,
    /// Route to an inspector
    ManualReview,
}

impl Recommendation {
    /// Parts with detected defects go to manual review
    pub const fn for_defects(defects_detected: bool) -> Self {
        if defects_detected {
            Recommendation::ManualReview
        } else {
            Recommendation::Accept
        }
    }
}

/// Market direction in a blockchain snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketTrend {
    /// Rising
    Bullish,
    /// Falling
    Bearish,
}

/// Trading signal action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    /// Open or add to a position
    Buy,
    /// Close or reduce a position
    Sell,
    /// Keep the current position
    Hold,
}

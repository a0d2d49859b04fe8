//! Visual quality inspection input and result

use serde::{Deserialize, Serialize};

use super::Recommendation;

/// Opaque handle to an uploaded image
///
/// Only metadata travels with it; pixel content is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageHandle {
    /// File name
    pub name: String,
    /// Declared content type
    pub mime_type: String,
    /// File size
    pub size_bytes: u64,
}

impl ImageHandle {
    /// Handle from file metadata
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Empty JPEG placeholder, as used by the dashboard demo
    pub fn sample() -> Self {
        Self::new("sample.jpg", "image/jpeg", 0)
    }
}

/// Inspection verdict for one part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAssessment {
    /// In `[85, 98]`
    pub quality_score: u32,
    /// Whether any defect was found
    pub defects_detected: bool,
    /// Empty iff no defects; otherwise 1-3 labels from the fixed pool
    pub defect_types: Vec<String>,
    /// In `[94, 99]`
    pub confidence: u32,
    /// Always `"0.8s"`
    pub processing_time: String,
    /// `MANUAL_REVIEW` iff defects were detected
    pub recommendation: Recommendation,
    /// Per-aspect scores
    pub advanced_metrics: InspectionMetrics,
}

/// Per-aspect inspection scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionMetrics {
    /// Percent
    pub pixel_accuracy: u32,
    /// Percent
    pub contour_detection: u32,
    /// Percent
    pub color_consistency: u32,
    /// Percent
    pub dimensional_accuracy: u32,
}

//! Visual Quality Inspection
//!
//! The inspection never looks at image content. Scores and the defect
//! decision are independent random draws mapped onto the bands below.

use super::Band;

// ===== SCORES =====

/// Quality score band (rounded to an integer).
pub const QUALITY_SCORE_BAND: Band = Band::new(85.0, 13.0);

/// Inspection confidence band (rounded to an integer).
pub const CONFIDENCE_BAND: Band = Band::new(94.0, 5.0);

// ===== DEFECTS =====

/// Defect probabilities strictly above this flag the part for review.
pub const DEFECT_THRESHOLD: f64 = 0.25;

/// Pool of defect labels. Flagged parts report a non-empty prefix of it.
pub const DEFECT_POOL: [&str; 3] = [
    "Surface irregularity",
    "Color deviation",
    "Dimensional tolerance",
];

/// Reported processing time label.
pub const PROCESSING_TIME: &str = "0.8s";

// ===== ADVANCED METRICS =====

/// Pixel accuracy band.
pub const PIXEL_ACCURACY_BAND: Band = Band::new(96.0, 3.0);

/// Contour detection band.
pub const CONTOUR_DETECTION_BAND: Band = Band::new(92.0, 6.0);

/// Color consistency band.
pub const COLOR_CONSISTENCY_BAND: Band = Band::new(88.0, 10.0);

/// Dimensional accuracy band.
pub const DIMENSIONAL_ACCURACY_BAND: Band = Band::new(94.0, 5.0);

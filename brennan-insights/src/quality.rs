//! Visual quality inspection
//!
//! The image handle is accepted for shape only. The defect decision is an
//! independent draw, and the reported defect labels are a prefix of the
//! fixed pool.

use brennan_core::constants::quality::*;
use brennan_core::{ImageHandle, InspectionMetrics, QualityAssessment, Recommendation};
use rand::Rng;

use crate::scoring::Draw;

/// Inspect `image` (metadata only)
pub fn assess<R: Rng + ?Sized>(rng: &mut R, image: &ImageHandle) -> QualityAssessment {
    let quality_score = rng.rounded(QUALITY_SCORE_BAND);
    let defect_probability = rng.unit();
    let defects_detected = defect_probability > DEFECT_THRESHOLD;

    let defect_types = if defects_detected {
        let count = rng.gen_range(1..=DEFECT_POOL.len());
        DEFECT_POOL[..count].iter().map(|d| d.to_string()).collect()
    } else {
        Vec::new()
    };

    log::trace!(
        "inspected {} ({} bytes): defect draw {:.3}",
        image.name,
        image.size_bytes,
        defect_probability
    );

    QualityAssessment {
        quality_score,
        defects_detected,
        defect_types,
        confidence: rng.rounded(CONFIDENCE_BAND),
        processing_time: PROCESSING_TIME.to_string(),
        recommendation: Recommendation::for_defects(defects_detected),
        advanced_metrics: InspectionMetrics {
            pixel_accuracy: rng.rounded(PIXEL_ACCURACY_BAND),
            contour_detection: rng.rounded(CONTOUR_DETECTION_BAND),
            color_consistency: rng.rounded(COLOR_CONSISTENCY_BAND),
            dimensional_accuracy: rng.rounded(DIMENSIONAL_ACCURACY_BAND),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn verdict_matches_defects() {
        let mut rng = StdRng::seed_from_u64(42);
        let image = ImageHandle::sample();
        let mut seen = (false, false);

        for _ in 0..500 {
            let result = assess(&mut rng, &image);
            assert!((85..=98).contains(&result.quality_score));
            assert!((94..=99).contains(&result.confidence));
            assert_eq!(result.defects_detected, !result.defect_types.is_empty());
            assert_eq!(
                result.recommendation == Recommendation::ManualReview,
                result.defects_detected
            );
            if result.defects_detected {
                seen.0 = true;
                assert_eq!(result.defect_types[0], "Surface irregularity");
                assert!(result.defect_types.len() <= 3);
            } else {
                seen.1 = true;
            }
        }

        assert!(seen.0 && seen.1, "both verdicts should occur over 500 draws");
    }
}

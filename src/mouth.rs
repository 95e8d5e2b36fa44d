//! Mouth-region features: outer-lip area and mouth-corner distance.

use serde::Serialize;

use crate::analyzer::{AnalysisInput, Analyzer, FeatureExtractor};
use crate::error::Result;
use crate::geometry::{distance, polygon_area};

/// Outer-lip boundary, ordered as a closed loop: right corner, around the
/// lower lip to the left corner, then back along the upper lip.
pub const LIPS_OUTER: &[usize] = &[
    61, 146, 91, 181, 84, 17, 314, 405, 321, 375, 291, 409, 270, 269, 267, 0, 37, 39, 40, 185,
];

/// Right and left mouth corners.
pub const MOUTH_CORNERS: [usize; 2] = [61, 291];

/// Mouth-region metrics for one landmark set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MouthMetrics {
    /// Area of the outer-lip contour, in square pixels.
    pub mouth_outer_area: f64,

    /// Corner-to-corner pixel distance divided by the normalization factor.
    /// Scale-invariant proxy for mouth stretch.
    pub mouth_corner_distance: f64,
}

/// Feature extractor for the mouth region.
pub struct MouthFeatures;

impl FeatureExtractor for MouthFeatures {
    type Metrics = MouthMetrics;

    fn compute(input: &AnalysisInput<'_>) -> MouthMetrics {
        let outer = input.contour(LIPS_OUTER);
        let [right, left] = MOUTH_CORNERS;

        MouthMetrics {
            mouth_outer_area: polygon_area(&outer),
            mouth_corner_distance: distance(input.pixel(right), input.pixel(left))
                / input.norm_factor,
        }
    }
}

/// Analyzer producing [`MouthMetrics`].
pub type MouthAnalyzer = Analyzer<MouthFeatures>;

impl Analyzer<MouthFeatures> {
    /// Outer-lip contour area, in square pixels.
    pub fn mouth_outer_area(&self) -> Result<f64> {
        Ok(self.metrics()?.mouth_outer_area)
    }

    /// Scale-normalized mouth-corner distance.
    pub fn mouth_corner_distance(&self) -> Result<f64> {
        Ok(self.metrics()?.mouth_corner_distance)
    }
}

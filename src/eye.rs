//! Eye-region features: inner-eye area and eyebrow activity.

use serde::Serialize;

use crate::analyzer::{AnalysisInput, Analyzer, FeatureExtractor, ANCHOR_LANDMARKS};
use crate::error::Result;
use crate::geometry::{distance, polygon_area};

/// Inner right-eyelid boundary, ordered as a closed loop.
pub const RIGHT_EYE_INNER: &[usize] = &[
    33, 7, 163, 144, 145, 153, 154, 155, 133, 173, 157, 158, 159, 160, 161, 246,
];

/// Inner left-eyelid boundary, ordered as a closed loop.
pub const LEFT_EYE_INNER: &[usize] = &[
    263, 249, 390, 373, 374, 380, 381, 382, 362, 398, 384, 385, 386, 387, 388, 466,
];

/// Upper right-eyebrow arc.
pub const RIGHT_EYEBROW_UPPER: &[usize] = &[156, 70, 63, 105, 66, 107, 55, 193];

/// Upper left-eyebrow arc.
pub const LEFT_EYEBROW_UPPER: &[usize] = &[383, 300, 293, 334, 296, 336, 285, 417];

/// Eye-region metrics for one landmark set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EyeMetrics {
    /// Combined area of the right and left inner-eye contours, in square
    /// pixels.
    pub eye_inner_area: f64,

    /// Sum of anchor-to-eyebrow pixel distances divided by the normalization
    /// factor. Scale-invariant proxy for eyebrow lift/furrow.
    pub eyebrow_activity: f64,
}

/// Feature extractor for the eye region.
pub struct EyeFeatures;

impl FeatureExtractor for EyeFeatures {
    type Metrics = EyeMetrics;

    fn compute(input: &AnalysisInput<'_>) -> EyeMetrics {
        EyeMetrics {
            eye_inner_area: eye_inner_area(input),
            eyebrow_activity: eyebrow_activity(input),
        }
    }
}

/// Analyzer producing [`EyeMetrics`].
pub type EyeAnalyzer = Analyzer<EyeFeatures>;

impl Analyzer<EyeFeatures> {
    /// Combined inner-eye contour area, in square pixels.
    pub fn eye_inner_area(&self) -> Result<f64> {
        Ok(self.metrics()?.eye_inner_area)
    }

    /// Scale-normalized eyebrow activity.
    pub fn eyebrow_activity(&self) -> Result<f64> {
        Ok(self.metrics()?.eyebrow_activity)
    }
}

fn eye_inner_area(input: &AnalysisInput<'_>) -> f64 {
    let right = input.contour(RIGHT_EYE_INNER);
    let left = input.contour(LEFT_EYE_INNER);
    polygon_area(&right) + polygon_area(&left)
}

fn eyebrow_activity(input: &AnalysisInput<'_>) -> f64 {
    let mut distances_sum = 0.0;

    for &a in ANCHOR_LANDMARKS {
        let anchor = input.pixel(a);

        for &i in RIGHT_EYEBROW_UPPER.iter().chain(LEFT_EYEBROW_UPPER.iter()) {
            distances_sum += distance(anchor, input.pixel(i));
        }
    }

    distances_sum / input.norm_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{Landmark, LandmarkSet, NUM_LANDMARKS};

    /// Landmark on the 1/128 coordinate grid, so pixel conversion is exact
    /// for 128x128 images and doubles exactly for 256x256.
    fn grid(px: u32, py: u32) -> Landmark {
        Landmark::new(f64::from(px) / 128.0, f64::from(py) / 128.0, 0.0)
    }

    /// Right eye traced as a 10-pixel square (extra loop points collapsed
    /// onto the last corner), left eye collapsed to a point.
    fn square_eye_set() -> LandmarkSet {
        let mut points = vec![grid(64, 64); NUM_LANDMARKS];

        for (k, &a) in ANCHOR_LANDMARKS.iter().enumerate() {
            points[a] = grid(30 + k as u32, 40);
        }

        let corners = [grid(0, 0), grid(10, 0), grid(10, 10), grid(0, 10)];
        for (k, &i) in RIGHT_EYE_INNER.iter().enumerate() {
            points[i] = *corners.get(k).unwrap_or(&corners[3]);
        }
        for &i in LEFT_EYE_INNER {
            points[i] = grid(100, 5);
        }

        LandmarkSet::new(points).unwrap()
    }

    #[test]
    fn tables_are_well_formed() {
        for table in [
            RIGHT_EYE_INNER,
            LEFT_EYE_INNER,
            RIGHT_EYEBROW_UPPER,
            LEFT_EYEBROW_UPPER,
        ] {
            assert!(table.iter().all(|&i| i < NUM_LANDMARKS));
        }
        assert!(RIGHT_EYE_INNER.len() >= 3);
        assert!(LEFT_EYE_INNER.len() >= 3);
        assert_eq!(RIGHT_EYE_INNER.len(), LEFT_EYE_INNER.len());
    }

    #[test]
    fn square_contour_yields_area_100() {
        let analyzer = EyeAnalyzer::with_landmarks(square_eye_set(), 128, 128).unwrap();
        assert!((analyzer.eye_inner_area().unwrap() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn eyebrow_activity_is_scale_invariant() {
        let base = EyeAnalyzer::with_landmarks(square_eye_set(), 128, 128).unwrap();
        let doubled = EyeAnalyzer::with_landmarks(square_eye_set(), 256, 256).unwrap();

        let a = base.eyebrow_activity().unwrap();
        let b = doubled.eyebrow_activity().unwrap();
        assert!(a > 0.0);
        assert!(((a - b) / a).abs() < 1e-6);
    }

    #[test]
    fn area_is_not_scale_invariant() {
        let base = EyeAnalyzer::with_landmarks(square_eye_set(), 128, 128).unwrap();
        let doubled = EyeAnalyzer::with_landmarks(square_eye_set(), 256, 256).unwrap();

        // Raw pixel units: doubling both dimensions quadruples the area.
        let a = base.eye_inner_area().unwrap();
        let b = doubled.eye_inner_area().unwrap();
        assert!((b - 4.0 * a).abs() < 1e-6);
    }

    #[test]
    fn accessors_fail_before_landmarks() {
        let analyzer = EyeAnalyzer::new(640, 480).unwrap();
        assert!(matches!(
            analyzer.eyebrow_activity().unwrap_err(),
            Error::MetricsNotReady
        ));
        assert!(analyzer.eye_inner_area().is_err());
    }
}

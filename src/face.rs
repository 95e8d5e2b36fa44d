//! Whole-face features: outline area and center of mass.

use serde::Serialize;

use crate::analyzer::{AnalysisInput, Analyzer, FeatureExtractor};
use crate::error::Result;
use crate::geometry::{norm, polygon_area};
use crate::types::Point;

/// Face outline, ordered as a closed loop from the forehead, down the left
/// side of the image, around the chin and back up.
pub const FACE_OVAL: &[usize] = &[
    10, 338, 297, 332, 284, 251, 389, 356, 454, 323, 361, 288, 397, 365, 379, 378, 400, 377, 152,
    148, 176, 149, 150, 136, 172, 58, 132, 93, 234, 127, 162, 21, 54, 103, 67, 109,
];

/// Whole-face metrics for one landmark set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceMetrics {
    /// Area of the face-outline contour, in square pixels.
    pub face_area: f64,

    /// Unweighted average of all 468 pixel-space landmark positions.
    pub center_of_mass: Point,
}

/// Feature extractor for the whole face.
pub struct FaceFeatures;

impl FeatureExtractor for FaceFeatures {
    type Metrics = FaceMetrics;

    fn compute(input: &AnalysisInput<'_>) -> FaceMetrics {
        let outline = input.contour(FACE_OVAL);

        let mut sum = Point::zero();
        for i in 0..input.landmarks.len() {
            sum = sum + input.pixel(i);
        }
        let center_of_mass = sum * (1.0 / input.landmarks.len() as f64);

        FaceMetrics {
            face_area: polygon_area(&outline),
            center_of_mass,
        }
    }
}

/// Analyzer producing [`FaceMetrics`].
pub type FaceAnalyzer = Analyzer<FaceFeatures>;

impl Analyzer<FaceFeatures> {
    /// Face-outline contour area, in square pixels.
    pub fn face_area(&self) -> Result<f64> {
        Ok(self.metrics()?.face_area)
    }

    /// Pixel-space center of mass of all landmarks.
    pub fn face_center_of_mass(&self) -> Result<Point> {
        Ok(self.metrics()?.center_of_mass)
    }

    /// Scalar center-of-mass position: the Euclidean norm of
    /// [`Analyzer::face_center_of_mass`].
    pub fn face_com(&self) -> Result<f64> {
        Ok(norm(self.metrics()?.center_of_mass))
    }
}

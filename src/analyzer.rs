//! Shared analyzer lifecycle: image dimensions, landmark storage and scale
//! normalization.
//!
//! Each specialized analyzer (eye, mouth, face) supplies a
//! [`FeatureExtractor`] that turns an [`AnalysisInput`] into its metrics
//! struct. The generic [`Analyzer`] owns the lifecycle around it: validating
//! dimensions, computing the normalization factor, and swapping the cached
//! frame in atomically on every [`Analyzer::set_landmarks`].

use log::debug;

use crate::error::{Error, Result};
use crate::geometry::{distance, to_pixel};
use crate::types::{LandmarkSet, Point};

/// Stable nose-bridge landmarks used as the scale reference.
pub const ANCHOR_LANDMARKS: &[usize] = &[1, 4, 5, 195, 197, 6];

/// Smallest normalization factor accepted as non-degenerate.
pub const MIN_NORM_FACTOR: f64 = 1e-6;

/// Everything a feature computation is allowed to see: the current landmark
/// set, the image pixel dimensions, and the scale-normalization factor.
pub struct AnalysisInput<'a> {
    pub landmarks: &'a LandmarkSet,
    pub width: u32,
    pub height: u32,
    pub norm_factor: f64,
}

impl AnalysisInput<'_> {
    /// Raw pixel-space position of a landmark (no grid truncation).
    pub fn pixel(&self, index: usize) -> Point {
        let lm = self.landmarks[index];
        Point::new(lm.x * f64::from(self.width), lm.y * f64::from(self.height))
    }

    /// Build a fresh contour of grid-truncated pixel points from an ordered
    /// index table. The buffer is newly allocated on every call; contours are
    /// never retained between frames.
    pub fn contour(&self, indices: &[usize]) -> Vec<Point> {
        indices
            .iter()
            .map(|&i| to_pixel(self.landmarks[i], self.width, self.height))
            .collect()
    }
}

/// The per-variant capability: recompute every declared metric from the
/// current input. Implementations must be pure, with no access to previously
/// cached metrics, so every call is a full overwrite.
pub trait FeatureExtractor {
    type Metrics;

    fn compute(input: &AnalysisInput<'_>) -> Self::Metrics;
}

/// Derived state for one landmark set, replaced wholesale on each update.
struct Frame<M> {
    landmarks: LandmarkSet,
    norm_factor: f64,
    metrics: M,
}

/// Generic analyzer over one [`FeatureExtractor`] variant.
///
/// Constructed with the pixel dimensions of the image the landmarks were
/// detected against; [`Analyzer::set_landmarks`] derives all metrics, and the
/// accessors return cached values until the next call. A failing call leaves
/// the previously computed frame untouched.
pub struct Analyzer<E: FeatureExtractor> {
    width: u32,
    height: u32,
    frame: Option<Frame<E::Metrics>>,
}

impl<E: FeatureExtractor> std::fmt::Debug for Analyzer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_frame", &self.frame.is_some())
            .finish()
    }
}

impl<E: FeatureExtractor> Analyzer<E> {
    /// Create an analyzer for images of the given pixel dimensions.
    ///
    /// Fails with [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            frame: None,
        })
    }

    /// Create an analyzer and immediately apply a landmark set.
    pub fn with_landmarks(landmarks: LandmarkSet, width: u32, height: u32) -> Result<Self> {
        let mut analyzer = Self::new(width, height)?;
        analyzer.set_landmarks(landmarks)?;
        Ok(analyzer)
    }

    /// Replace the current landmark set and recompute every metric.
    ///
    /// Computes the normalization factor, runs the variant's pure feature
    /// computation, and only then swaps the new frame in. On failure the
    /// previous frame (if any) stays valid.
    pub fn set_landmarks(&mut self, landmarks: LandmarkSet) -> Result<()> {
        let norm_factor = normalization_factor(&landmarks, self.width, self.height)?;
        debug!("normalization factor: {norm_factor:.3}");

        let metrics = E::compute(&AnalysisInput {
            landmarks: &landmarks,
            width: self.width,
            height: self.height,
            norm_factor,
        });

        self.frame = Some(Frame {
            landmarks,
            norm_factor,
            metrics,
        });

        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The landmark set the current metrics were computed from.
    pub fn landmarks(&self) -> Result<&LandmarkSet> {
        self.frame
            .as_ref()
            .map(|f| &f.landmarks)
            .ok_or(Error::MetricsNotReady)
    }

    /// The scale-normalization factor for the current landmark set.
    pub fn normalization_factor(&self) -> Result<f64> {
        self.frame
            .as_ref()
            .map(|f| f.norm_factor)
            .ok_or(Error::MetricsNotReady)
    }

    /// The metrics computed from the current landmark set.
    ///
    /// Fails with [`Error::MetricsNotReady`] until the first successful
    /// [`Analyzer::set_landmarks`]; an unset analyzer never reports a
    /// plausible-looking zero.
    pub fn metrics(&self) -> Result<&E::Metrics> {
        self.frame
            .as_ref()
            .map(|f| &f.metrics)
            .ok_or(Error::MetricsNotReady)
    }
}

/// Sum of pixel-space distances over all unordered anchor-landmark pairs.
///
/// Deterministic and independent of table order. Fails with
/// [`Error::DegenerateAnchors`] when the sum is at or below
/// [`MIN_NORM_FACTOR`], which happens exactly when all anchors coincide on
/// the pixel grid.
pub fn normalization_factor(landmarks: &LandmarkSet, width: u32, height: u32) -> Result<f64> {
    let mut factor = 0.0;

    for (i, &a) in ANCHOR_LANDMARKS.iter().enumerate() {
        let pa = to_pixel(landmarks[a], width, height);
        for &b in &ANCHOR_LANDMARKS[i + 1..] {
            let pb = to_pixel(landmarks[b], width, height);
            factor += distance(pa, pb);
        }
    }

    if factor <= MIN_NORM_FACTOR {
        return Err(Error::DegenerateAnchors { factor });
    }

    Ok(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Landmark, NUM_LANDMARKS};

    /// All landmarks on a diagonal across a 1/128 grid; anchors are distinct.
    fn diagonal_set() -> LandmarkSet {
        LandmarkSet::from_fn(|i| {
            let t = (i % 128) as f64 / 128.0;
            Landmark::new(t, t, 0.0)
        })
    }

    struct NormEcho;

    impl FeatureExtractor for NormEcho {
        type Metrics = f64;

        fn compute(input: &AnalysisInput<'_>) -> f64 {
            input.norm_factor
        }
    }

    #[test]
    fn anchor_indices_in_range() {
        assert!(ANCHOR_LANDMARKS.iter().all(|&i| i < NUM_LANDMARKS));
    }

    #[test]
    fn zero_dimensions_rejected() {
        let err = Analyzer::<NormEcho>::new(0, 480).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions {
                width: 0,
                height: 480
            }
        ));

        assert!(Analyzer::<NormEcho>::new(640, 0).is_err());
        assert!(Analyzer::<NormEcho>::new(640, 480).is_ok());
    }

    #[test]
    fn metrics_unavailable_before_landmarks() {
        let analyzer = Analyzer::<NormEcho>::new(640, 480).unwrap();
        assert!(matches!(
            analyzer.metrics().unwrap_err(),
            Error::MetricsNotReady
        ));
        assert!(analyzer.normalization_factor().is_err());
        assert!(analyzer.landmarks().is_err());
    }

    #[test]
    fn normalization_factor_positive_for_spread_anchors() {
        let factor = normalization_factor(&diagonal_set(), 128, 128).unwrap();
        assert!(factor > 0.0);
    }

    #[test]
    fn coincident_anchors_are_degenerate() {
        let set = LandmarkSet::from_fn(|_| Landmark::new(0.5, 0.5, 0.0));
        let err = normalization_factor(&set, 640, 480).unwrap_err();
        assert!(matches!(err, Error::DegenerateAnchors { .. }));
    }

    #[test]
    fn failed_update_keeps_previous_frame() {
        let mut analyzer = Analyzer::<NormEcho>::new(128, 128).unwrap();
        analyzer.set_landmarks(diagonal_set()).unwrap();
        let before = *analyzer.metrics().unwrap();

        let degenerate = LandmarkSet::from_fn(|_| Landmark::new(0.5, 0.5, 0.0));
        assert!(analyzer.set_landmarks(degenerate).is_err());

        assert_eq!(*analyzer.metrics().unwrap(), before);
    }

    #[test]
    fn set_landmarks_is_idempotent() {
        let mut analyzer = Analyzer::<NormEcho>::new(128, 128).unwrap();
        analyzer.set_landmarks(diagonal_set()).unwrap();
        let first = *analyzer.metrics().unwrap();
        analyzer.set_landmarks(diagonal_set()).unwrap();
        assert_eq!(*analyzer.metrics().unwrap(), first);
    }

    #[test]
    fn with_landmarks_computes_immediately() {
        let analyzer = Analyzer::<NormEcho>::with_landmarks(diagonal_set(), 128, 128).unwrap();
        assert!(analyzer.metrics().is_ok());
        assert_eq!(analyzer.width(), 128);
        assert_eq!(analyzer.height(), 128);
    }
}

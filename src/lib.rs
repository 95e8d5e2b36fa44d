//! # face-features
//!
//! Scalar facial-expression features from MediaPipe face-mesh landmarks.
//!
//! This crate consumes one 468-point normalized landmark list (produced by an
//! external face-mesh detector) together with the pixel dimensions of the
//! image it was detected against, and reduces it to a small set of named
//! scalar metrics usable as proxies for expression intensity:
//!
//! - **Eye**: inner-eye contour area, eyebrow activity
//! - **Mouth**: outer-lip contour area, mouth-corner distance
//! - **Face**: outline area, center of mass
//!
//! Distance-sum metrics are divided by a normalization factor derived from
//! stable nose-bridge anchor landmarks, making them comparable across
//! differently sized faces and images; contour areas stay in raw pixel units.
//!
//! ## Quick Start
//!
//! ```rust
//! use face_features::{EyeAnalyzer, Landmark, LandmarkSet};
//!
//! // Landmarks normally come from an external face-mesh detector; here a
//! // synthetic diagonal stands in.
//! let landmarks = LandmarkSet::from_fn(|i| {
//!     let t = i as f64 / 468.0;
//!     Landmark::new(0.25 + t / 2.0, 0.25 + t / 2.0, 0.0)
//! });
//!
//! let mut analyzer = EyeAnalyzer::new(640, 480).unwrap();
//! analyzer.set_landmarks(landmarks).unwrap();
//!
//! println!("eyebrow activity: {}", analyzer.eyebrow_activity().unwrap());
//! ```
//!
//! Analyzers are reusable across frames: each `set_landmarks` call fully
//! replaces the cached landmark set and every derived metric. One analyzer
//! instance serves one frame at a time; use one instance per thread for
//! parallel analysis.

mod analyzer;
mod error;
mod eye;
mod face;
mod geometry;
mod mouth;
mod types;

pub use analyzer::{
    normalization_factor, AnalysisInput, Analyzer, FeatureExtractor, ANCHOR_LANDMARKS,
    MIN_NORM_FACTOR,
};
pub use error::{Error, Result};
pub use eye::{
    EyeAnalyzer, EyeFeatures, EyeMetrics, LEFT_EYEBROW_UPPER, LEFT_EYE_INNER, RIGHT_EYEBROW_UPPER,
    RIGHT_EYE_INNER,
};
pub use face::{FaceAnalyzer, FaceFeatures, FaceMetrics, FACE_OVAL};
pub use geometry::{distance, norm, polygon_area, to_pixel};
pub use mouth::{MouthAnalyzer, MouthFeatures, MouthMetrics, LIPS_OUTER, MOUTH_CORNERS};
pub use types::{Landmark, LandmarkSet, Point, NUM_LANDMARKS};

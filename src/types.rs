use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of points in a MediaPipe face-mesh landmark list.
pub const NUM_LANDMARKS: usize = 468;

/// A 2D point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// One detected facial keypoint in normalized image coordinates.
///
/// All three components are fractions of the image dimensions in [0, 1].
/// Depth (`z`) is part of the detector contract but unused by every metric;
/// it defaults to 0 when absent from serialized input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An ordered, fixed-length list of 468 normalized landmarks.
///
/// Index order is a contract with the external face-mesh detector: every
/// landmark-index table in this crate refers to positions in that order.
/// The length is checked once at construction, so any `LandmarkSet` in hand
/// is well-shaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    /// Validate and wrap a detector output list.
    ///
    /// Fails with [`Error::LandmarkCount`] unless exactly
    /// [`NUM_LANDMARKS`] points are supplied.
    pub fn new(points: Vec<Landmark>) -> Result<Self> {
        if points.len() != NUM_LANDMARKS {
            return Err(Error::LandmarkCount {
                expected: NUM_LANDMARKS,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Build a full-length set from a function of the landmark index.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> Landmark,
    {
        Self {
            points: (0..NUM_LANDMARKS).map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

//! Pure 2D geometry shared by the analyzers.

use crate::types::{Landmark, Point};

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Magnitude of a point treated as a vector from the origin.
pub fn norm(p: Point) -> f64 {
    (p.x * p.x + p.y * p.y).sqrt()
}

/// Convert a normalized landmark to the integer pixel grid.
///
/// Multiplies x and y by the image dimensions and truncates; depth is
/// dropped. Callers guarantee positive dimensions.
pub fn to_pixel(landmark: Landmark, width: u32, height: u32) -> Point {
    Point::new(
        (landmark.x * f64::from(width)).trunc(),
        (landmark.y * f64::from(height)).trunc(),
    )
}

/// Calculate the area of a closed polygon using the shoelace formula.
///
/// Always non-negative. Fewer than 3 points, or degenerate (collinear or
/// coincident) input, yields 0.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    let n = points.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }

    (area / 2.0).abs()
}

use crate::math::angle_2d::{angle_from_screen, screen_angle};
use crate::math::{Point2, Vector2};

/// A finite line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    /// Start point.
    pub p1: Point2,
    /// End point.
    pub p2: Point2,
}

impl Segment2 {
    /// Creates a segment from `p1` to `p2`.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Vector from `p1` to `p2`.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.p1, &self.p2)
    }

    /// Direction in screen convention: degrees counter-clockwise from +x on
    /// a y-down screen, in `[0, 360)`. Zero-length segments report 0.
    #[must_use]
    pub fn screen_angle(&self) -> f64 {
        screen_angle(&self.delta())
    }

    /// Direction as a true course in `[0, 360)`: 0 up, 90 right.
    #[must_use]
    pub fn true_angle(&self) -> f64 {
        angle_from_screen(self.screen_angle())
    }
}

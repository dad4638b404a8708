//! Angle helpers in degrees.
//!
//! Two conventions meet here. A *screen angle* is measured counter-clockwise
//! from the positive x axis as seen on a y-down screen. A *true angle* is a
//! compass course: 0 points up the screen, 90 right, 180 down, 270 left.

use super::Vector2;

/// Maps any finite angle into `[0, 360)`.
#[must_use]
pub fn normalize_course(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Shortest-arc difference between two angles, always in `[0, 180]`.
#[must_use]
pub fn angle_abs_diff(a: f64, b: f64) -> f64 {
    180.0 - ((normalize_course(a) - normalize_course(b)).abs() - 180.0).abs()
}

/// Converts a screen angle into a true angle.
#[must_use]
pub fn angle_from_screen(screen: f64) -> f64 {
    normalize_course(90.0 - screen)
}

/// Screen angle of a direction vector in a y-down coordinate system.
///
/// A zero vector has angle 0.
#[must_use]
pub fn screen_angle(delta: &Vector2) -> f64 {
    if *delta == Vector2::zeros() {
        return 0.0;
    }
    normalize_course((-delta.y).atan2(delta.x).to_degrees())
}

pub mod angle_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type (screen space, y pointing down).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` if `a` and `b` differ by at most `epsilon`.
#[must_use]
pub fn almost_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Returns `true` if both coordinates of `a` and `b` are within [`TOLERANCE`].
#[must_use]
pub fn points_almost_equal(a: &Point2, b: &Point2) -> bool {
    almost_equal(a.x, b.x, TOLERANCE) && almost_equal(a.y, b.y, TOLERANCE)
}

/// Maps `index` into `0..n` with Euclidean modulo, so `-1` becomes `n - 1`
/// and `n` becomes `0`.
///
/// Returns 0 for `n == 0`.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn wrap_index(index: isize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    index.rem_euclid(n as isize) as usize
}

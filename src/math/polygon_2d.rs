use super::{almost_equal, Point2, TOLERANCE};

/// Returns the index of the vertex with the smallest y, breaking ties by
/// smallest x. That vertex always lies on the convex hull.
///
/// Only the first `count` points are considered. Returns `None` when there are
/// none.
#[must_use]
pub fn find_corner_point(points: &[Point2], count: usize) -> Option<usize> {
    let mut best: Option<(usize, &Point2)> = None;
    for (i, pt) in points.iter().enumerate().take(count) {
        match best {
            Some((_, b))
                if pt.y > b.y + TOLERANCE
                    || (almost_equal(pt.y, b.y, TOLERANCE) && pt.x >= b.x) => {}
            _ => best = Some((i, pt)),
        }
    }
    best.map(|(i, _)| i)
}

/// Determinant of the homogeneous orientation matrix
///
/// ```text
///     [ 1 xa ya ]
/// O = [ 1 xb yb ]
///     [ 1 xc yc ]
/// ```
///
/// Twice the signed area of the triangle `a, b, c`. Positive when the turn
/// `a -> b -> c` is clockwise on a y-down screen.
#[must_use]
pub fn orientation_determinant(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x * c.y + a.x * b.y + a.y * c.x) - (a.y * b.x + b.y * c.x + a.x * c.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn corner_is_min_y() {
        let pts = [p(1.0, 2.0), p(0.5, 1.0), p(2.0, 0.5), p(3.0, 4.0)];
        assert_eq!(find_corner_point(&pts, pts.len()), Some(2));
    }

    #[test]
    fn corner_tie_takes_min_x() {
        // Bottom edge (min y) holds three vertices; the leftmost wins.
        let pts = [p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0), p(2.0, 5.0)];
        assert_eq!(find_corner_point(&pts, pts.len()), Some(1));
    }

    #[test]
    fn corner_respects_count() {
        let pts = [p(1.0, 1.0), p(2.0, 2.0), p(0.0, 0.0)];
        assert_eq!(find_corner_point(&pts, 2), Some(0));
        assert_eq!(find_corner_point(&pts, 0), None);
    }

    #[test]
    fn determinant_sign() {
        // Right, then down on screen: clockwise as drawn.
        let det = orientation_determinant(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0));
        assert_abs_diff_eq!(det, 1.0, epsilon = 1e-12);
        let det = orientation_determinant(&p(1.0, 1.0), &p(1.0, 0.0), &p(0.0, 0.0));
        assert_abs_diff_eq!(det, -1.0, epsilon = 1e-12);
        let det = orientation_determinant(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0));
        assert_abs_diff_eq!(det, 0.0, epsilon = 1e-12);
    }
}

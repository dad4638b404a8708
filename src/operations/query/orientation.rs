use crate::geometry::Polygon;
use crate::math::points_almost_equal;
use crate::math::polygon_2d::{find_corner_point, orientation_determinant};
use crate::math::Point2;

/// Winding of a polygon as drawn on a y-down screen.
///
/// Callers working in y-up (Cartesian) coordinates must call
/// [`reversed`](Self::reversed) on the result: a ring that is clockwise with
/// y pointing up is reported as `CounterClockwise` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    /// Fewer than three distinct vertices.
    Degenerate,
}

impl Orientation {
    /// The opposite winding. Use it to read results in y-up coordinates.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::Degenerate => Self::Degenerate,
        }
    }
}

/// Determines the vertex order of a polygon.
///
/// Picks the min-y (then min-x) vertex, which is on the convex hull, and
/// evaluates the turn formed with the nearest distinct vertex on either side.
/// Collinear neighbors report [`Orientation::CounterClockwise`].
pub struct PolygonOrientation<'a> {
    polygon: &'a Polygon,
}

impl<'a> PolygonOrientation<'a> {
    /// Creates a new orientation query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Orientation {
        if self.polygon.is_degenerate() {
            return Orientation::Degenerate;
        }
        let count = self.polygon.edge_count();
        let Some(corner) = find_corner_point(self.polygon.vertices(), count) else {
            return Orientation::Degenerate;
        };

        #[allow(clippy::cast_possible_wrap)]
        let corner = corner as isize;
        let Some(b) = self.polygon.vertex(corner) else {
            return Orientation::Degenerate;
        };
        let (Some(a), Some(c)) = (
            self.distinct_neighbor(corner, b, -1),
            self.distinct_neighbor(corner, b, 1),
        ) else {
            return Orientation::Degenerate;
        };

        if orientation_determinant(a, b, c) > 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    /// Walks from `corner` in direction `step` and returns the first vertex
    /// not almost equal to `pivot`.
    #[allow(clippy::cast_possible_wrap)]
    fn distinct_neighbor(
        &self,
        corner: isize,
        pivot: &Point2,
        step: isize,
    ) -> Option<&'a Point2> {
        let polygon: &'a Polygon = self.polygon;
        let n = polygon.edge_count() as isize;
        (1..n)
            .filter_map(|k| polygon.vertex(corner + step * k))
            .find(|pt| !points_almost_equal(pt, pivot))
    }
}

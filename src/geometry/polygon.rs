use crate::math::{points_almost_equal, wrap_index, Point2};

use super::Segment2;

/// An ordered ring of vertices, optionally closed by repeating the first
/// vertex at the end.
///
/// The closing duplicate is kept in [`vertices`](Self::vertices) but excluded
/// from [`edge_count`](Self::edge_count), and every neighbor lookup wraps
/// around the remaining vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
    closed: bool,
}

impl Polygon {
    /// Creates a polygon, treating it as closed when the last vertex repeats
    /// the first.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        let closed = match (vertices.first(), vertices.last()) {
            (Some(first), Some(last)) if vertices.len() > 1 => points_almost_equal(first, last),
            _ => false,
        };
        Self { vertices, closed }
    }

    /// Creates a polygon with an explicit closure flag.
    ///
    /// With `closed == true` a repeated closing vertex is excluded from the
    /// edge count. With `closed == false` every vertex counts, even if the
    /// last one repeats the first.
    #[must_use]
    pub fn with_closure(vertices: Vec<Point2>, closed: bool) -> Self {
        let closed = closed
            && vertices.len() > 1
            && vertices
                .first()
                .zip(vertices.last())
                .is_some_and(|(first, last)| points_almost_equal(first, last));
        Self { vertices, closed }
    }

    /// All vertices as given, closing duplicate included.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns `true` if the last vertex is a closing duplicate of the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of distinct ring positions, which is also the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        if self.closed {
            self.vertices.len() - 1
        } else {
            self.vertices.len()
        }
    }

    /// Vertex at `index`, wrapped into `0..edge_count()`.
    ///
    /// Returns `None` only for an empty polygon.
    #[must_use]
    pub fn vertex(&self, index: isize) -> Option<&Point2> {
        let n = self.edge_count();
        if n == 0 {
            return None;
        }
        self.vertices.get(wrap_index(index, n))
    }

    /// Edge `i` runs from vertex `i` to vertex `i + 1`; the last edge wraps
    /// back to vertex 0.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment2> {
        let ring = &self.vertices[..self.edge_count()];
        ring.iter()
            .zip(ring.iter().cycle().skip(1))
            .map(|(a, b)| Segment2::new(*a, *b))
            .collect()
    }

    /// Returns `true` if fewer than three edges or fewer than three
    /// pairwise-distinct vertices remain after dropping the closing vertex.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let ring = &self.vertices[..self.edge_count()];
        if ring.len() < 3 {
            return true;
        }
        let mut distinct: Vec<&Point2> = Vec::with_capacity(3);
        for pt in ring {
            if distinct.iter().all(|d| !points_almost_equal(d, pt)) {
                distinct.push(pt);
                if distinct.len() == 3 {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square_open() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn open_square() {
        let poly = Polygon::new(square_open());
        assert!(!poly.is_closed());
        assert_eq!(poly.edge_count(), 4);
        assert!(!poly.is_degenerate());
    }

    #[test]
    fn closure_is_inferred() {
        let mut pts = square_open();
        pts.push(p(0.0, 0.0));
        let poly = Polygon::new(pts);
        assert!(poly.is_closed());
        assert_eq!(poly.edge_count(), 4);
        assert_eq!(poly.edges(), Polygon::new(square_open()).edges());
    }

    #[test]
    fn explicit_open_keeps_duplicate() {
        let mut pts = square_open();
        pts.push(p(0.0, 0.0));
        let poly = Polygon::with_closure(pts, false);
        assert!(!poly.is_closed());
        assert_eq!(poly.edge_count(), 5);
        // Zero-length edge from the duplicate back to vertex 0.
        assert!(poly.edges()[4].length() < 1e-12);
    }

    #[test]
    fn explicit_closed_without_duplicate() {
        let poly = Polygon::with_closure(square_open(), true);
        assert!(!poly.is_closed());
        assert_eq!(poly.edge_count(), 4);
    }

    #[test]
    fn edges_wrap_around() {
        let poly = Polygon::new(square_open());
        let edges = poly.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], Segment2::new(p(0.0, 1.0), p(0.0, 0.0)));
    }

    #[test]
    fn vertex_wraps() {
        let mut pts = square_open();
        pts.push(p(0.0, 0.0));
        let poly = Polygon::new(pts);
        assert_eq!(poly.vertex(-1).unwrap(), &p(0.0, 1.0));
        assert_eq!(poly.vertex(4).unwrap(), &p(0.0, 0.0));
        assert!(Polygon::new(Vec::new()).vertex(0).is_none());
    }

    #[test]
    fn degenerate_inputs() {
        assert!(Polygon::new(Vec::new()).is_degenerate());
        assert!(Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]).is_degenerate());
        // Closed triangle outline with only two distinct ring vertices.
        assert!(Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]).is_degenerate());
        // Four vertices but just two distinct positions.
        assert!(Polygon::new(vec![p(0.0, 0.0), p(0.0, 0.0), p(0.0, 0.0), p(1.0, 1.0)])
            .is_degenerate());
        assert!(!Polygon::new(vec![p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)])
            .is_degenerate());
    }
}

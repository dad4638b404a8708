use crate::geometry::{Segment2, Viewport};
use crate::math::angle_2d::angle_abs_diff;

use super::visibility::VisibilityMode;

/// Polygon vertex indices covered by an edge. A single edge `i` spans
/// `from = i` to `to = i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeSpan {
    pub from: usize,
    pub to: usize,
}

/// A polygon edge annotated with its visible length and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotatedEdge {
    /// Euclidean length, 0 when the edge is not visible.
    pub length: f64,
    /// True angle in `[0, 360)`, recorded for visible and invisible edges.
    pub angle: f64,
    /// Vertex indices spanned, `None` when the edge is not visible.
    pub span: Option<EdgeSpan>,
    /// Endpoints. After merging `p2` is the far end of the last merged edge.
    pub segment: Segment2,
}

impl AnnotatedEdge {
    /// An edge that passed the visibility test.
    #[must_use]
    pub fn visible(segment: Segment2, angle: f64, index: usize) -> Self {
        Self {
            length: segment.length(),
            angle,
            span: Some(EdgeSpan {
                from: index,
                to: index + 1,
            }),
            segment,
        }
    }

    /// An edge that is not visible; only its angle is meaningful.
    #[must_use]
    pub fn invisible(segment: Segment2, angle: f64) -> Self {
        Self {
            length: 0.0,
            angle,
            span: None,
            segment,
        }
    }

    /// Returns `true` if the edge passed the visibility test.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.span.is_some()
    }

    /// First vertex index, `None` for an invisible edge.
    #[must_use]
    pub fn index_from(&self) -> Option<usize> {
        self.span.map(|s| s.from)
    }

    /// Last vertex index, `None` for an invisible edge.
    #[must_use]
    pub fn index_to(&self) -> Option<usize> {
        self.span.map(|s| s.to)
    }

    /// Grows this edge to also cover `next`: the span end, the summed length
    /// and the far endpoint move to `next`. The angle stays unchanged.
    pub fn extend_with(&mut self, next: &Self) {
        if let (Some(span), Some(next_span)) = (self.span.as_mut(), next.span) {
            span.to = next_span.to;
        }
        self.length += next.length;
        self.segment.p2 = next.segment.p2;
    }

    /// Returns `true` if the shortest arc between both angles is below
    /// `max_angle`.
    #[must_use]
    pub fn has_same_angle(&self, other: &Self, max_angle: f64) -> bool {
        angle_abs_diff(self.angle, other.angle) < max_angle
    }
}

/// Output of [`EdgeDistances`].
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDistanceSet {
    /// One entry per input edge, in input order.
    pub edges: Vec<AnnotatedEdge>,
    /// Population variance of the angle change between consecutive entries,
    /// in squared degrees. `Some` only if requested.
    pub angle_variance: Option<f64>,
}

impl EdgeDistanceSet {
    /// Number of edges that passed the visibility test.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_valid()).count()
    }
}

/// Annotates a list of polygon edges against a viewport.
pub struct EdgeDistances<'a> {
    edges: &'a [Segment2],
    viewport: Viewport,
    mode: VisibilityMode,
    angle_variance: bool,
}

impl<'a> EdgeDistances<'a> {
    /// Creates a builder for `edges` using [`VisibilityMode::Inside`].
    #[must_use]
    pub fn new(edges: &'a [Segment2], viewport: Viewport) -> Self {
        Self {
            edges,
            viewport,
            mode: VisibilityMode::default(),
            angle_variance: false,
        }
    }

    /// Sets which edges count as visible.
    #[must_use]
    pub fn with_mode(mut self, mode: VisibilityMode) -> Self {
        self.mode = mode;
        self
    }

    /// Also computes the variance of the angle change between edges.
    #[must_use]
    pub fn with_angle_variance(mut self) -> Self {
        self.angle_variance = true;
        self
    }

    /// Executes the builder, producing one entry per input edge.
    #[must_use]
    pub fn execute(&self) -> EdgeDistanceSet {
        let mut out: Vec<AnnotatedEdge> = Vec::with_capacity(self.edges.len());
        let mut diffs = Vec::new();

        for (i, segment) in self.edges.iter().enumerate() {
            let angle = segment.true_angle();

            if self.angle_variance {
                if let Some(prev) = out.last() {
                    diffs.push(angle_abs_diff(angle, prev.angle));
                }
            }

            let edge = if self.mode.accepts(segment, &self.viewport) {
                AnnotatedEdge::visible(*segment, angle, i)
            } else {
                AnnotatedEdge::invisible(*segment, angle)
            };
            out.push(edge);
        }

        EdgeDistanceSet {
            edges: out,
            angle_variance: self.angle_variance.then(|| population_variance(&diffs)),
        }
    }
}

/// Mean of squared deviations from the mean; 0 for an empty slice.
#[allow(clippy::cast_precision_loss)]
fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn rect_edges(x: f64, y: f64, w: f64, h: f64) -> Vec<Segment2> {
        Polygon::new(vec![p(x, y), p(x + w, y), p(x + w, y + h), p(x, y + h)]).edges()
    }

    fn square_edges(x: f64, y: f64, side: f64) -> Vec<Segment2> {
        rect_edges(x, y, side, side)
    }

    #[test]
    fn square_inside_viewport() {
        let vp = Viewport::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let edges = square_edges(10.0, 10.0, 20.0);
        let set = EdgeDistances::new(&edges, vp).execute();

        assert_eq!(set.edges.len(), 4);
        assert_eq!(set.visible_count(), 4);
        assert!(set.angle_variance.is_none());
        for (edge, expected) in set.edges.iter().zip([90.0, 180.0, 270.0, 0.0]) {
            assert_abs_diff_eq!(edge.length, 20.0, epsilon = 1e-12);
            assert_abs_diff_eq!(edge.angle, expected, epsilon = 1e-9);
        }
        assert_eq!(set.edges[2].span, Some(EdgeSpan { from: 2, to: 3 }));
        assert_eq!(set.edges[3].index_to(), Some(4));
    }

    #[test]
    fn invisible_edges_keep_angle() {
        let vp = Viewport::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let edges = square_edges(200.0, 200.0, 20.0);
        let set = EdgeDistances::new(&edges, vp).execute();

        assert_eq!(set.visible_count(), 0);
        for edge in &set.edges {
            assert!(!edge.is_valid());
            assert_eq!(edge.index_from(), None);
            assert_abs_diff_eq!(edge.length, 0.0);
        }
        assert_abs_diff_eq!(set.edges[0].angle, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn touching_mode_accepts_crossing_edge() {
        let vp = Viewport::new(0.0, 0.0, 100.0, 100.0).unwrap();
        // Band wider than the viewport: no edge fully inside.
        let edges = rect_edges(-10.0, 40.0, 120.0, 20.0);
        let strict = EdgeDistances::new(&edges, vp).execute();
        assert_eq!(strict.visible_count(), 0);

        let loose = EdgeDistances::new(&edges, vp)
            .with_mode(VisibilityMode::Touching)
            .execute();
        // Top and bottom cross both borders, the short sides are outside.
        assert_eq!(loose.visible_count(), 2);
        assert!(loose.edges[0].is_valid());
        assert!(!loose.edges[1].is_valid());
        assert!(loose.edges[2].is_valid());
        assert!(!loose.edges[3].is_valid());
        assert_abs_diff_eq!(loose.edges[0].length, 120.0, epsilon = 1e-12);
    }

    #[test]
    fn square_variance_is_zero() {
        let vp = Viewport::new(0.0, 0.0, 100.0, 100.0).unwrap();
        let edges = square_edges(10.0, 10.0, 20.0);
        let set = EdgeDistances::new(&edges, vp).with_angle_variance().execute();
        // Every turn is 90 degrees.
        assert_abs_diff_eq!(set.angle_variance.unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn variance_uses_population_formula() {
        let vp = Viewport::new(0.0, 0.0, 100.0, 100.0).unwrap();
        // Angles 90, 180, 0: differences 90 and 180, mean 135, variance 2025.
        let edges = vec![
            Segment2::new(p(10.0, 10.0), p(20.0, 10.0)),
            Segment2::new(p(20.0, 10.0), p(20.0, 20.0)),
            Segment2::new(p(20.0, 20.0), p(20.0, 5.0)),
        ];
        let set = EdgeDistances::new(&edges, vp).with_angle_variance().execute();
        assert_abs_diff_eq!(set.angle_variance.unwrap(), 2025.0, epsilon = 1e-6);
    }

    #[test]
    fn variance_counts_invisible_edges() {
        let vp = Viewport::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let edges = vec![
            Segment2::new(p(10.0, 10.0), p(20.0, 10.0)),
            Segment2::new(p(20.0, 10.0), p(20.0, 20.0)),
            Segment2::new(p(20.0, 20.0), p(20.0, 5.0)),
        ];
        let set = EdgeDistances::new(&edges, vp).with_angle_variance().execute();
        assert_eq!(set.visible_count(), 0);
        assert_abs_diff_eq!(set.angle_variance.unwrap(), 2025.0, epsilon = 1e-6);
    }

    #[test]
    fn empty_and_single_edge() {
        let vp = Viewport::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let set = EdgeDistances::new(&[], vp).with_angle_variance().execute();
        assert!(set.edges.is_empty());
        assert_abs_diff_eq!(set.angle_variance.unwrap(), 0.0);

        let one = [Segment2::new(p(0.0, 0.0), p(1.0, 0.0))];
        let set = EdgeDistances::new(&one, vp).with_angle_variance().execute();
        assert_abs_diff_eq!(set.angle_variance.unwrap(), 0.0);
    }

    #[test]
    fn same_angle_across_north() {
        let a = AnnotatedEdge::visible(Segment2::new(p(0.0, 0.0), p(1.0, 0.0)), 358.0, 0);
        let b = AnnotatedEdge::visible(Segment2::new(p(0.0, 0.0), p(1.0, 0.0)), 2.0, 1);
        assert!(a.has_same_angle(&b, 5.0));
        assert!(!a.has_same_angle(&b, 4.0));
    }
}

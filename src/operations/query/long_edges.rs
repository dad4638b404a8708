use tracing::{debug, trace};

use crate::geometry::{Polygon, Segment2, Viewport};
use crate::math::almost_equal;

use super::edge_distances::{AnnotatedEdge, EdgeDistanceSet, EdgeDistances};
use super::visibility::VisibilityMode;

/// Upper bound (exclusive) of the angle-change variance, in squared degrees,
/// below which a polygon is reported as circular. Calibrated on real map
/// polygons rather than derived.
pub const CIRCLE_VARIANCE_THRESHOLD: f64 = 100.0;

/// Edge lengths closer than this rank as equal and fall back to start index.
pub const LENGTH_TIE_TOLERANCE: f64 = 0.001;

/// Returns `true` if an angle-change variance indicates a circular polygon.
///
/// Zero variance comes from degenerate input such as a repeated point and is
/// never circular.
#[must_use]
pub fn is_circular_variance(variance: f64) -> bool {
    variance > 0.0 && variance < CIRCLE_VARIANCE_THRESHOLD
}

/// Parameters for [`LongEdges`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongEdgeParams {
    /// Maximum number of edges returned.
    pub limit: usize,
    /// Consecutive visible edges whose angles differ by less than this many
    /// degrees are merged. Zero or negative disables merging.
    pub max_angle: f64,
    /// Whether to run the circularity heuristic.
    pub detect_circle: bool,
}

impl Default for LongEdgeParams {
    fn default() -> Self {
        Self {
            limit: usize::MAX,
            max_angle: 0.0,
            detect_circle: false,
        }
    }
}

/// Output of [`LongEdges`].
#[derive(Debug, Clone, PartialEq)]
pub struct LongEdgeResult {
    /// Longest first, at most `limit` entries.
    pub edges: Vec<AnnotatedEdge>,
    /// `Some` only if circle detection was requested.
    pub circular: Option<bool>,
}

/// Selects the longest visible edges of a polygon, typically as label
/// anchors.
///
/// # Algorithm
///
/// 1. Annotate every edge, counting only edges fully inside the viewport.
///    If none is, annotate again counting edges touching the viewport.
/// 2. Optionally flag the polygon as circular from the angle-change variance.
/// 3. Optionally merge runs of visible edges with similar angles.
/// 4. Rank by descending length, near-equal lengths by start index, and keep
///    the first `limit`.
pub struct LongEdges<'a> {
    polygon: &'a Polygon,
    viewport: Viewport,
    params: LongEdgeParams,
}

impl<'a> LongEdges<'a> {
    /// Creates a new query with default parameters.
    #[must_use]
    pub fn new(polygon: &'a Polygon, viewport: Viewport) -> Self {
        Self {
            polygon,
            viewport,
            params: LongEdgeParams::default(),
        }
    }

    /// Replaces all parameters at once.
    #[must_use]
    pub fn with_params(mut self, params: LongEdgeParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the maximum number of returned edges.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.params.limit = limit;
        self
    }

    /// Sets the merge threshold in degrees; zero or negative disables merging.
    #[must_use]
    pub fn with_max_angle(mut self, max_angle: f64) -> Self {
        self.params.max_angle = max_angle;
        self
    }

    /// Enables the circularity heuristic.
    #[must_use]
    pub fn with_circle_detection(mut self) -> Self {
        self.params.detect_circle = true;
        self
    }

    /// Executes the query. Degenerate polygons and a zero limit give an empty
    /// result.
    #[must_use]
    pub fn execute(&self) -> LongEdgeResult {
        let LongEdgeParams {
            limit,
            max_angle,
            detect_circle,
        } = self.params;

        if self.polygon.is_degenerate() || limit == 0 {
            return LongEdgeResult {
                edges: Vec::new(),
                circular: detect_circle.then_some(false),
            };
        }

        let segments = self.polygon.edges();
        let set = self.collect_visible(&segments);
        let circular =
            detect_circle.then(|| set.angle_variance.is_some_and(is_circular_variance));

        let mut edges = if max_angle > 0.0 {
            merge_similar(set.edges, max_angle)
        } else {
            set.edges
        };
        rank(&mut edges);
        edges.truncate(limit);

        trace!(
            polygon_edges = segments.len(),
            selected = edges.len(),
            ?circular,
            "selected long edges"
        );
        LongEdgeResult { edges, circular }
    }

    /// Annotates in strict mode, retrying once in touching mode if no edge is
    /// fully inside.
    fn collect_visible(&self, segments: &[Segment2]) -> EdgeDistanceSet {
        let strict = self.annotate(segments, VisibilityMode::Inside);
        if strict.visible_count() > 0 {
            return strict;
        }
        debug!(
            edges = segments.len(),
            "no edge fully inside viewport, retrying with touching edges"
        );
        self.annotate(segments, VisibilityMode::Touching)
    }

    fn annotate(&self, segments: &[Segment2], mode: VisibilityMode) -> EdgeDistanceSet {
        let builder = EdgeDistances::new(segments, self.viewport).with_mode(mode);
        if self.params.detect_circle {
            builder.with_angle_variance().execute()
        } else {
            builder.execute()
        }
    }
}

/// Folds consecutive valid edges into runs whose angles stay within
/// `max_angle` of the run's first edge. Invalid edges are dropped; a list
/// without any valid edge is returned unchanged.
fn merge_similar(edges: Vec<AnnotatedEdge>, max_angle: f64) -> Vec<AnnotatedEdge> {
    if !edges.iter().any(AnnotatedEdge::is_valid) {
        return edges;
    }
    edges
        .into_iter()
        .filter(AnnotatedEdge::is_valid)
        .fold(Vec::new(), |mut merged: Vec<AnnotatedEdge>, edge| {
            match merged.last_mut() {
                Some(run) if edge.has_same_angle(run, max_angle) => run.extend_with(&edge),
                _ => merged.push(edge),
            }
            merged
        })
}

/// Sorts by descending length. Each run of lengths within
/// [`LENGTH_TIE_TOLERANCE`] of its longest member is then ordered by start
/// index, invalid edges first.
fn rank(edges: &mut [AnnotatedEdge]) {
    edges.sort_by(|a, b| b.length.total_cmp(&a.length));

    let mut start = 0;
    while start < edges.len() {
        let head = edges[start].length;
        let end = edges[start..]
            .iter()
            .position(|e| !almost_equal(e.length, head, LENGTH_TIE_TOLERANCE))
            .map_or(edges.len(), |offset| start + offset);
        // A NaN length never matches its own head; keep the run non-empty.
        let end = end.max(start + 1);
        edges[start..end].sort_by_key(|e| e.span);
        start = end;
    }
}

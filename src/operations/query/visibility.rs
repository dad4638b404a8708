use crate::geometry::{Segment2, Viewport};
use crate::math::intersect_2d::segments_intersect_2d;

/// How much of an edge is visible in a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Both endpoints inside.
    Inside,
    /// One endpoint inside or the edge crosses the border.
    Touching,
    Invisible,
}

/// Which edges count as visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityMode {
    /// Only edges fully inside the viewport.
    #[default]
    Inside,
    /// Edges touching or crossing the viewport as well.
    Touching,
}

impl VisibilityMode {
    /// Applies the predicate for this mode.
    #[must_use]
    pub fn accepts(self, edge: &Segment2, viewport: &Viewport) -> bool {
        match self {
            Self::Inside => is_edge_inside_rect(edge, viewport),
            Self::Touching => is_edge_touching_rect(edge, viewport),
        }
    }
}

/// Returns `true` if an endpoint lies in `viewport` or the edge has a bounded
/// intersection with one of its four sides.
#[must_use]
pub fn is_edge_touching_rect(edge: &Segment2, viewport: &Viewport) -> bool {
    viewport.contains(&edge.p1)
        || viewport.contains(&edge.p2)
        || viewport
            .boundary()
            .iter()
            .any(|side| segments_intersect_2d(&edge.p1, &edge.p2, &side.p1, &side.p2))
}

/// Returns `true` if both endpoints lie in `viewport`. The viewport is
/// convex so the whole edge is then inside.
#[must_use]
pub fn is_edge_inside_rect(edge: &Segment2, viewport: &Viewport) -> bool {
    viewport.contains(&edge.p1) && viewport.contains(&edge.p2)
}

/// Classifies `edge` against `viewport`.
#[must_use]
pub fn classify_edge(edge: &Segment2, viewport: &Viewport) -> Visibility {
    if is_edge_inside_rect(edge, viewport) {
        Visibility::Inside
    } else if is_edge_touching_rect(edge, viewport) {
        Visibility::Touching
    } else {
        Visibility::Invisible
    }
}

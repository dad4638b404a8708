mod edge_distances;
mod long_edges;
mod orientation;
mod visibility;

pub use edge_distances::{AnnotatedEdge, EdgeDistanceSet, EdgeDistances, EdgeSpan};
pub use long_edges::{
    is_circular_variance, LongEdgeParams, LongEdgeResult, LongEdges, CIRCLE_VARIANCE_THRESHOLD,
    LENGTH_TIE_TOLERANCE,
};
pub use orientation::{Orientation, PolygonOrientation};
pub use visibility::{
    classify_edge, is_edge_inside_rect, is_edge_touching_rect, Visibility, VisibilityMode,
};

//! Geometric metadata for 2D polygons drawn on a map: winding order, which
//! edges are long and visible enough to carry a label, and whether the
//! outline is roughly circular.
//!
//! All edge queries work in screen coordinates with the y axis pointing down.

pub mod error;
pub mod geo;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, PolyedgeError, Result};
pub use geometry::{Polygon, Segment2, Viewport};
pub use operations::query::{
    AnnotatedEdge, LongEdgeParams, LongEdgeResult, LongEdges, Orientation, PolygonOrientation,
};

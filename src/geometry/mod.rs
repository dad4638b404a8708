mod polygon;
mod segment;
mod viewport;

pub use polygon::Polygon;
pub use segment::Segment2;
pub use viewport::Viewport;

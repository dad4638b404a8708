//! Geographic coordinates in degrees. Independent of the screen-space
//! geometry used by the edge queries.

mod pos;
mod rect;

pub use pos::GeoPos;
pub use rect::GeoRect;

/// Meters per degree of latitude, using 60 nautical miles per degree.
pub const METERS_PER_DEGREE: f64 = 60.0 * 1852.0;

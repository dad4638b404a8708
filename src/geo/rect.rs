use crate::error::{GeometryError, Result};

use super::{GeoPos, METERS_PER_DEGREE};

/// A geographic bounding rectangle given by its north-west and south-east
/// corners.
///
/// The rectangle crosses the anti-meridian when its west edge lies east of
/// its east edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRect {
    top_left: GeoPos,
    bottom_right: GeoPos,
}

impl GeoRect {
    /// A zero-size rectangle at `pos`.
    #[must_use]
    pub fn from_pos(pos: GeoPos) -> Self {
        Self {
            top_left: pos,
            bottom_right: pos,
        }
    }

    /// Creates a rectangle from its four edges in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is out of range or `north < south`.
    pub fn new(west: f64, north: f64, east: f64, south: f64) -> Result<Self> {
        Self::from_corners(GeoPos::new(west, north)?, GeoPos::new(east, south)?)
    }

    /// Creates a rectangle from its north-west and south-east corners.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRectangle` if the top-left corner lies
    /// south of the bottom-right corner.
    pub fn from_corners(top_left: GeoPos, bottom_right: GeoPos) -> Result<Self> {
        if top_left.lat() < bottom_right.lat() {
            return Err(GeometryError::InvalidRectangle {
                reason: format!(
                    "north {} is below south {}",
                    top_left.lat(),
                    bottom_right.lat()
                ),
            }
            .into());
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// The rectangle enclosing a circle of `radius_m` meters around `center`.
    ///
    /// Near the poles, or when the circle spans all longitudes, the rectangle
    /// covers `-180..180`.
    #[must_use]
    pub fn around(center: GeoPos, radius_m: f64) -> Self {
        let lat_delta = radius_m.abs() / METERS_PER_DEGREE;
        let north = (center.lat() + lat_delta).min(90.0);
        let south = (center.lat() - lat_delta).max(-90.0);

        let cos_lat = center.lat().to_radians().cos();
        let lon_delta = if cos_lat > f64::EPSILON {
            lat_delta / cos_lat
        } else {
            f64::INFINITY
        };

        let (west, east) = if lon_delta >= 180.0 || north >= 90.0 || south <= -90.0 {
            (-180.0, 180.0)
        } else {
            (
                normalize_lon(center.lon() - lon_delta),
                normalize_lon(center.lon() + lon_delta),
            )
        };
        Self {
            top_left: GeoPos::new_unchecked(west, north),
            bottom_right: GeoPos::new_unchecked(east, south),
        }
    }

    /// North-west corner.
    #[must_use]
    pub fn top_left(&self) -> GeoPos {
        self.top_left
    }

    /// South-east corner.
    #[must_use]
    pub fn bottom_right(&self) -> GeoPos {
        self.bottom_right
    }

    /// North-east corner.
    #[must_use]
    pub fn top_right(&self) -> GeoPos {
        GeoPos::new_unchecked(self.east(), self.north())
    }

    /// South-west corner.
    #[must_use]
    pub fn bottom_left(&self) -> GeoPos {
        GeoPos::new_unchecked(self.west(), self.south())
    }

    /// Northern latitude.
    #[must_use]
    pub fn north(&self) -> f64 {
        self.top_left.lat()
    }

    /// Southern latitude.
    #[must_use]
    pub fn south(&self) -> f64 {
        self.bottom_right.lat()
    }

    /// Eastern longitude.
    #[must_use]
    pub fn east(&self) -> f64 {
        self.bottom_right.lon()
    }

    /// Western longitude.
    #[must_use]
    pub fn west(&self) -> f64 {
        self.top_left.lon()
    }

    /// Longitude span, counted across the anti-meridian when crossing it.
    #[must_use]
    pub fn width_degree(&self) -> f64 {
        if self.crosses_anti_meridian() {
            (180.0 - self.west()) + (self.east() + 180.0)
        } else {
            self.east() - self.west()
        }
    }

    /// Latitude span.
    #[must_use]
    pub fn height_degree(&self) -> f64 {
        self.north() - self.south()
    }

    /// Rough width in meters along the center latitude.
    #[must_use]
    pub fn width_meter(&self) -> f64 {
        self.width_degree() * METERS_PER_DEGREE * self.center().lat().to_radians().cos()
    }

    /// Rough height in meters.
    #[must_use]
    pub fn height_meter(&self) -> f64 {
        self.height_degree() * METERS_PER_DEGREE
    }

    /// Center position.
    #[must_use]
    pub fn center(&self) -> GeoPos {
        GeoPos::new_unchecked(
            normalize_lon(self.west() + self.width_degree() / 2.0),
            (self.north() + self.south()) / 2.0,
        )
    }

    /// Middle of the northern edge.
    #[must_use]
    pub fn top_center(&self) -> GeoPos {
        GeoPos::new_unchecked(self.center().lon(), self.north())
    }

    /// Middle of the southern edge.
    #[must_use]
    pub fn bottom_center(&self) -> GeoPos {
        GeoPos::new_unchecked(self.center().lon(), self.south())
    }

    /// Returns `true` if both corners coincide.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.top_left == self.bottom_right
    }

    /// Returns `true` if the west edge lies east of the east edge.
    #[must_use]
    pub fn crosses_anti_meridian(&self) -> bool {
        self.west() > self.east()
    }

    /// Returns `true` if `pos` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, pos: &GeoPos) -> bool {
        pos.lat() <= self.north() && pos.lat() >= self.south() && self.contains_lon(pos.lon())
    }

    /// Grows the rectangle to include `pos`.
    ///
    /// A longitude outside a rectangle crossing the anti-meridian moves
    /// whichever edge is closer.
    pub fn extend(&mut self, pos: &GeoPos) {
        let north = self.north().max(pos.lat());
        let south = self.south().min(pos.lat());

        let (mut west, mut east) = (self.west(), self.east());
        if !self.contains_lon(pos.lon()) {
            if self.crosses_anti_meridian() {
                if pos.lon() - east < west - pos.lon() {
                    east = pos.lon();
                } else {
                    west = pos.lon();
                }
            } else {
                west = west.min(pos.lon());
                east = east.max(pos.lon());
            }
        }

        self.top_left = GeoPos::new_unchecked(west, north);
        self.bottom_right = GeoPos::new_unchecked(east, south);
    }

    /// Splits at the anti-meridian into a western and an eastern part, or
    /// returns a copy of `self` when there is nothing to split.
    #[must_use]
    pub fn split_at_anti_meridian(&self) -> Vec<GeoRect> {
        if !self.crosses_anti_meridian() {
            return vec![*self];
        }
        vec![
            Self {
                top_left: self.top_left,
                bottom_right: GeoPos::new_unchecked(180.0, self.south()),
            },
            Self {
                top_left: GeoPos::new_unchecked(-180.0, self.north()),
                bottom_right: self.bottom_right,
            },
        ]
    }

    fn contains_lon(&self, lon: f64) -> bool {
        if self.crosses_anti_meridian() {
            lon >= self.west() || lon <= self.east()
        } else {
            lon >= self.west() && lon <= self.east()
        }
    }
}

/// Maps a longitude into `[-180, 180)`.
fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

use crate::error::{GeometryError, Result};

/// A longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPos {
    lon: f64,
    lat: f64,
}

impl GeoPos {
    /// Creates a position.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if a value is NaN or infinite
    /// - `GeometryError::CoordinateOutOfRange` if `lon` is outside
    ///   `[-180, 180]` or `lat` outside `[-90, 90]`
    pub fn new(lon: f64, lat: f64) -> Result<Self> {
        if !lon.is_finite() {
            return Err(GeometryError::NonFinite("longitude").into());
        }
        if !lat.is_finite() {
            return Err(GeometryError::NonFinite("latitude").into());
        }
        check_range("longitude", lon, 180.0)?;
        check_range("latitude", lat, 90.0)?;
        Ok(Self { lon, lat })
    }

    /// Creates a position from values already known to be in range.
    pub(crate) fn new_unchecked(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }
}

fn check_range(coordinate: &'static str, value: f64, limit: f64) -> Result<()> {
    if value < -limit || value > limit {
        return Err(GeometryError::CoordinateOutOfRange {
            coordinate,
            value,
            min: -limit,
            max: limit,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolyedgeError;

    #[test]
    fn accepts_valid_positions() {
        assert!(GeoPos::new(180.0, -90.0).is_ok());
        assert!(GeoPos::new(-180.0, 90.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            GeoPos::new(181.0, 0.0),
            Err(PolyedgeError::Geometry(GeometryError::CoordinateOutOfRange {
                coordinate: "longitude",
                ..
            }))
        ));
        assert!(matches!(
            GeoPos::new(0.0, -91.0),
            Err(PolyedgeError::Geometry(GeometryError::CoordinateOutOfRange {
                coordinate: "latitude",
                ..
            }))
        ));
        assert!(matches!(
            GeoPos::new(f64::NAN, 0.0),
            Err(PolyedgeError::Geometry(GeometryError::NonFinite("longitude")))
        ));
    }
}

use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::Segment2;

/// An axis-aligned screen rectangle. `x`/`y` is the top-left corner and the
/// y axis points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport from its top-left corner and size.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidViewport` if any value is not finite or
    /// the size is negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()) {
            return Err(GeometryError::InvalidViewport {
                reason: format!("non-finite rectangle ({x}, {y}, {width}, {height})"),
            }
            .into());
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::InvalidViewport {
                reason: format!("negative size {width} x {height}"),
            }
            .into());
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Creates a viewport spanning two opposite corners given in any order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidViewport` if a coordinate is not finite.
    pub fn from_corners(a: Point2, b: Point2) -> Result<Self> {
        Self::new(a.x.min(b.x), a.y.min(b.y), (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Left edge x.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Top edge y.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Right edge x.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Top-left corner.
    #[must_use]
    pub fn top_left(&self) -> Point2 {
        Point2::new(self.left(), self.top())
    }

    /// Top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Point2 {
        Point2::new(self.right(), self.top())
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Point2 {
        Point2::new(self.right(), self.bottom())
    }

    /// Bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Point2 {
        Point2::new(self.left(), self.bottom())
    }

    /// Returns `true` if `pt` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, pt: &Point2) -> bool {
        pt.x >= self.left() && pt.x <= self.right() && pt.y >= self.top() && pt.y <= self.bottom()
    }

    /// The four sides in order top, right, bottom, left.
    #[must_use]
    pub fn boundary(&self) -> [Segment2; 4] {
        [
            Segment2::new(self.top_left(), self.top_right()),
            Segment2::new(self.top_right(), self.bottom_right()),
            Segment2::new(self.bottom_right(), self.bottom_left()),
            Segment2::new(self.bottom_left(), self.top_left()),
        ]
    }
}

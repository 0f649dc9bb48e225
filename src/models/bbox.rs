//! Axis-aligned bounding box used as the containment pre-filter.

use geo::{Coord, Rect};

/// Axis-aligned bounds of a polygon ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bbox {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Whether the point lies outside the box on either axis.
    ///
    /// Points on the box edge are not rejected.
    pub fn rejects(&self, pt: Coord<f64>) -> bool {
        pt.x < self.xmin || pt.x > self.xmax || pt.y < self.ymin || pt.y > self.ymax
    }
}

impl From<Rect<f64>> for Bbox {
    fn from(rect: Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y)
    }
}

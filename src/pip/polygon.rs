//! Simple polygon with a precomputed bounding box and an even-odd
//! containment test.

use geo::{BoundingRect, Coord, LineString};

use crate::error::PolygonError;
use crate::models::{Bbox, RingClosure};

/// A simple polygon ring with its bounds.
///
/// The ring is immutable after construction, so `bbox` stays equal to its
/// true bounds.
#[derive(Debug, Clone)]
pub struct Polygon {
    ring: LineString<f64>,
    bbox: Bbox,
}

impl Polygon {
    /// Build a polygon from its vertices, keeping the ring as given
    pub fn new(vertices: Vec<Coord<f64>>) -> Result<Self, PolygonError> {
        Self::with_closure(vertices, RingClosure::AsGiven)
    }

    /// Build a polygon from its vertices with an explicit closure policy
    pub fn with_closure(
        mut vertices: Vec<Coord<f64>>,
        closure: RingClosure,
    ) -> Result<Self, PolygonError> {
        let first = *vertices.first().ok_or(PolygonError::EmptyRing)?;

        if closure == RingClosure::Close && vertices.last() != Some(&first) {
            vertices.push(first);
        }

        let ring = LineString::new(vertices);
        let bbox = ring
            .bounding_rect()
            .map(Bbox::from)
            .ok_or(PolygonError::EmptyRing)?;

        Ok(Self { ring, bbox })
    }

    /// Even-odd ray casting test.
    ///
    /// Only edges between consecutive ring entries are crossed; there is no
    /// implicit edge from the last vertex back to the first. Points exactly
    /// on an edge or vertex get whatever the crossing arithmetic yields.
    pub fn contains(&self, pt: Coord<f64>) -> bool {
        if self.bbox.rejects(pt) {
            return false;
        }

        let mut inside = false;
        for edge in self.ring.lines() {
            let (a, b) = (edge.end, edge.start);
            // A horizontal edge never straddles, so the division below only
            // runs when a.y != b.y.
            if (pt.y < a.y) != (pt.y < b.y) && pt.x < (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
        }
        inside
    }

    pub fn ring(&self) -> &LineString<f64> {
        &self.ring
    }

    pub fn vertex_count(&self) -> usize {
        self.ring.0.len()
    }

    pub fn bbox(&self) -> Bbox {
        self.bbox
    }
}

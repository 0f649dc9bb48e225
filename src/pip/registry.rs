//! Ordered polygon registry with a first-match linear scan.

use geo::Coord;
use hashbrown::HashSet;
use tracing::debug;

use super::Polygon;
use crate::error::RegistryError;
use crate::models::{PolygonId, NO_MATCH};

/// Polygons in registration order.
///
/// Scan order is insertion order, so a point inside several polygons always
/// resolves to the one registered first.
#[derive(Debug, Default)]
pub struct PolygonRegistry {
    entries: Vec<(PolygonId, Polygon)>,
    ids: HashSet<PolygonId>,
}

impl PolygonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            ids: HashSet::with_capacity(capacity),
        }
    }

    /// Append a polygon to the end of the scan order
    pub fn register(&mut self, id: PolygonId, polygon: Polygon) -> Result<(), RegistryError> {
        if id == NO_MATCH {
            return Err(RegistryError::ReservedId);
        }
        if !self.ids.insert(id) {
            return Err(RegistryError::DuplicateId(id));
        }

        debug!(
            "Registered polygon {} with {} vertices",
            id,
            polygon.vertex_count()
        );
        self.entries.push((id, polygon));
        Ok(())
    }

    /// First registered polygon containing the point
    pub fn find(&self, pt: Coord<f64>) -> Option<(PolygonId, &Polygon)> {
        self.entries
            .iter()
            .find(|(_, polygon)| polygon.contains(pt))
            .map(|(id, polygon)| (*id, polygon))
    }

    /// Identifier of the first polygon containing the point, or `NO_MATCH`
    pub fn classify(&self, pt: Coord<f64>) -> PolygonId {
        self.find(pt).map(|(id, _)| id).unwrap_or(NO_MATCH)
    }

    /// Classify every point, keeping input order
    pub fn classify_all(&self, points: &[Coord<f64>]) -> Vec<PolygonId> {
        points.iter().map(|pt| self.classify(*pt)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in scan order
    pub fn iter(&self) -> impl Iterator<Item = (PolygonId, &Polygon)> {
        self.entries.iter().map(|(id, polygon)| (*id, polygon))
    }
}

//! Point-in-Polygon (PIP) classification.
//!
//! Holds polygons in registration order and answers, for a query point,
//! which registered polygon contains it using a bounding-box reject followed
//! by an even-odd ray cast.

mod polygon;
mod registry;

pub use polygon::Polygon;
pub use registry::PolygonRegistry;

//! geoencode - brute-force point-in-polygon classification
//!
//! Registers simple polygons in order and reports, for each query point, the
//! first registered polygon that contains it.

pub mod error;
pub mod input;
pub mod models;
pub mod pip;

pub use error::{InputError, PolygonError, RegistryError};
pub use models::{Bbox, PolygonId, RingClosure, NO_MATCH};
pub use pip::{Polygon, PolygonRegistry};

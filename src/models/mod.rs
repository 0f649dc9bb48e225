//! Core value types shared by the polygon scan and the input format.

pub mod bbox;
pub mod ring;

pub use bbox::Bbox;
pub use ring::{PolygonId, RingClosure, NO_MATCH};

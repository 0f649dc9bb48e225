//! Polygon identifiers and ring closure policy.

use serde::Deserialize;

/// Identifier of a registered polygon.
pub type PolygonId = u64;

/// Sentinel returned when no polygon contains a point.
pub const NO_MATCH: PolygonId = 0;

/// How the last edge of a ring is treated.
///
/// Rings are used as given by default: only edges between consecutive
/// vertices are tested, so a ring is closed only if its input repeats the
/// first vertex at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingClosure {
    /// Keep the vertex sequence exactly as supplied
    #[default]
    AsGiven,
    /// Append the first vertex when the ring does not already end on it
    Close,
}

impl std::fmt::Display for RingClosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RingClosure::AsGiven => write!(f, "as_given"),
            RingClosure::Close => write!(f, "close"),
        }
    }
}

//! Error types for polygon construction, registration and input parsing.

use thiserror::Error;

use crate::models::PolygonId;

/// Polygon construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolygonError {
    /// A polygon needs at least one vertex to have bounds
    #[error("Polygon ring has no vertices")]
    EmptyRing,
}

/// Registration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `0` is the "no match" sentinel and cannot name a polygon
    #[error("Polygon identifier 0 is reserved")]
    ReservedId,

    #[error("Polygon identifier {0} is already registered")]
    DuplicateId(PolygonId),
}

/// Input format errors. Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Line {line}: malformed header {content:?}, expected two integers `M N`")]
    MalformedHeader { line: usize, content: String },

    #[error("Line {line}: malformed polygon line: {reason}")]
    MalformedPolygonLine { line: usize, reason: String },

    #[error("Line {line}: malformed point {content:?}, expected `x,y`")]
    MalformedPointLine { line: usize, content: String },

    #[error("Line {line}: invalid polygon: {source}")]
    InvalidPolygon {
        line: usize,
        #[source]
        source: PolygonError,
    },

    #[error("Line {line}: {source}")]
    Registry {
        line: usize,
        #[source]
        source: RegistryError,
    },

    #[error("Line {line}: failed to read line: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected end of input: header declared {expected} {what}, found {found}")]
    UnexpectedEof {
        expected: usize,
        found: usize,
        what: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Line the error was raised on, if it belongs to one
    pub fn line(&self) -> Option<usize> {
        match self {
            InputError::MalformedHeader { line, .. }
            | InputError::MalformedPolygonLine { line, .. }
            | InputError::MalformedPointLine { line, .. }
            | InputError::InvalidPolygon { line, .. }
            | InputError::Registry { line, .. }
            | InputError::Read { line, .. } => Some(*line),
            InputError::UnexpectedEof { .. } | InputError::Io(_) => None,
        }
    }
}

//! Parsers for the individual line kinds of the batch format.

use geo::{coord, Coord};

use crate::error::InputError;
use crate::models::PolygonId;

/// Parse the `M N` header into polygon and point counts
pub fn parse_header(line_no: usize, line: &str) -> Result<(usize, usize), InputError> {
    let malformed = || InputError::MalformedHeader {
        line: line_no,
        content: line.to_string(),
    };

    let mut tokens = line.split_whitespace();
    let polygons = tokens.next().and_then(|t| t.parse().ok()).ok_or_else(malformed)?;
    let points = tokens.next().and_then(|t| t.parse().ok()).ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }

    Ok((polygons, points))
}

/// Parse `<identifier> <x,y;x,y;...>` into an identifier and its vertices
pub fn parse_polygon_line(
    line_no: usize,
    line: &str,
) -> Result<(PolygonId, Vec<Coord<f64>>), InputError> {
    let malformed = |reason: String| InputError::MalformedPolygonLine {
        line: line_no,
        reason,
    };

    let (id_str, vertex_list) = line
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(|| malformed("missing separator between identifier and vertices".into()))?;

    let id: PolygonId = id_str
        .parse()
        .map_err(|_| malformed(format!("invalid identifier {:?}", id_str)))?;

    let vertices = vertex_list
        .trim()
        .split(';')
        .map(|token| parse_coord(token).ok_or_else(|| malformed(format!("invalid vertex {:?}", token))))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((id, vertices))
}

/// Parse a query point line `x,y`
pub fn parse_point_line(line_no: usize, line: &str) -> Result<Coord<f64>, InputError> {
    parse_coord(line).ok_or_else(|| InputError::MalformedPointLine {
        line: line_no,
        content: line.to_string(),
    })
}

/// Parse a single `x,y` pair, tolerating whitespace around each number
fn parse_coord(token: &str) -> Option<Coord<f64>> {
    let (x, y) = token.split_once(',')?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;
    Some(coord! { x: x, y: y })
}

//! Batch pipeline: read polygons and points, classify, write ids.

use std::io::{BufRead, BufWriter, Write};
use std::time::{Duration, Instant};

use geo::Coord;
use tracing::{debug, info, warn};

use super::parse::{parse_header, parse_point_line, parse_polygon_line};
use crate::error::InputError;
use crate::models::{PolygonId, RingClosure};
use crate::pip::{Polygon, PolygonRegistry};

/// Upper bound on buffers sized from the header counts
const MAX_PREALLOC: usize = 1 << 16;

/// Fully parsed input: the registry and the query points in input order
#[derive(Debug)]
pub struct Batch {
    pub registry: PolygonRegistry,
    pub points: Vec<Coord<f64>>,
}

/// Wall-clock time spent in each phase of a run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub polygons: usize,
    pub points: usize,
    pub parse_polygons: Duration,
    pub parse_points: Duration,
    pub encode: Duration,
    pub write: Duration,
}

impl RunStats {
    pub fn total(&self) -> Duration {
        self.parse_polygons + self.parse_points + self.encode + self.write
    }

    /// Mean classification time per query point
    pub fn per_query(&self) -> Duration {
        if self.points == 0 {
            return Duration::ZERO;
        }
        self.encode.div_f64(self.points as f64)
    }

    pub fn log_summary(&self) {
        info!(
            "Classified {} points against {} polygons in {:?}",
            self.points,
            self.polygons,
            self.total()
        );
        info!("  parse polygons: {:?}", self.parse_polygons);
        info!("  parse points:   {:?}", self.parse_points);
        info!("  encode points:  {:?}", self.encode);
        info!("  write results:  {:?}", self.write);
        info!("  per query:      {:?}", self.per_query());
    }
}

/// Read a whole batch, failing on the first malformed line.
pub fn read_batch<R: BufRead>(reader: R, closure: RingClosure) -> Result<Batch, InputError> {
    read_batch_timed(reader, closure, &mut RunStats::default())
}

fn read_batch_timed<R: BufRead>(
    reader: R,
    closure: RingClosure,
    stats: &mut RunStats,
) -> Result<Batch, InputError> {
    let mut lines = reader.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (m, n) = match lines.next() {
        Some((line_no, line)) => parse_header(line_no, &read_line(line_no, line)?)?,
        None => parse_header(1, "")?,
    };
    debug!("Header declares {} polygons and {} points", m, n);

    let begin = Instant::now();
    let mut registry = PolygonRegistry::with_capacity(m.min(MAX_PREALLOC));
    for found in 0..m {
        let (line_no, line) = lines.next().ok_or(InputError::UnexpectedEof {
            expected: m,
            found,
            what: "polygon lines",
        })?;
        let line = read_line(line_no, line)?;

        let (id, vertices) = parse_polygon_line(line_no, &line)?;
        let polygon = Polygon::with_closure(vertices, closure)
            .map_err(|source| InputError::InvalidPolygon { line: line_no, source })?;
        registry
            .register(id, polygon)
            .map_err(|source| InputError::Registry { line: line_no, source })?;
    }
    stats.parse_polygons = begin.elapsed();

    let begin = Instant::now();
    let mut points = Vec::with_capacity(n.min(MAX_PREALLOC));
    for found in 0..n {
        let (line_no, line) = lines.next().ok_or(InputError::UnexpectedEof {
            expected: n,
            found,
            what: "point lines",
        })?;
        let line = read_line(line_no, line)?;
        points.push(parse_point_line(line_no, &line)?);
    }
    stats.parse_points = begin.elapsed();

    let mut trailing = 0;
    for (line_no, line) in lines {
        match line {
            Ok(line) if line.trim().is_empty() => {}
            Ok(_) => trailing += 1,
            Err(e) => {
                debug!("Unreadable line {} after the declared points: {}", line_no, e);
                trailing += 1;
            }
        }
    }
    if trailing > 0 {
        warn!(
            "Ignoring {} non-empty lines after the {} declared points",
            trailing, n
        );
    }

    stats.polygons = registry.len();
    stats.points = points.len();

    Ok(Batch { registry, points })
}

fn read_line(line_no: usize, line: std::io::Result<String>) -> Result<String, InputError> {
    line.map_err(|source| InputError::Read {
        line: line_no,
        source,
    })
}

/// Write one identifier per line
pub fn write_results<W: Write>(writer: W, ids: &[PolygonId]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for id in ids {
        writeln!(writer, "{}", id)?;
    }
    writer.flush()
}

/// Run the whole pipeline.
///
/// Nothing is written until every input line has parsed.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    closure: RingClosure,
) -> Result<RunStats, InputError> {
    let mut stats = RunStats::default();
    let batch = read_batch_timed(reader, closure, &mut stats)?;

    let begin = Instant::now();
    let ids = batch.registry.classify_all(&batch.points);
    stats.encode = begin.elapsed();

    let begin = Instant::now();
    write_results(writer, &ids)?;
    stats.write = begin.elapsed();

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    const SCENARIO: &str = "2 3\n1 0,0;0,10;10,10;10,0\n2 5,5;5,15;15,15;15,5\n1,1\n12,12\n20,20\n";

    fn run_str(input: &str, closure: RingClosure) -> Result<String, InputError> {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, closure)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scenario() {
        assert_eq!(run_str(SCENARIO, RingClosure::AsGiven).unwrap(), "1\n2\n0\n");
    }

    #[test]
    fn test_read_batch_keeps_order() {
        let batch = read_batch(SCENARIO.as_bytes(), RingClosure::AsGiven).unwrap();
        let ids: Vec<PolygonId> = batch.registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            batch.points,
            vec![
                coord! { x: 1.0, y: 1.0 },
                coord! { x: 12.0, y: 12.0 },
                coord! { x: 20.0, y: 20.0 },
            ]
        );
    }

    #[test]
    fn test_closure_is_applied_to_every_polygon() {
        let input = "1 1\n1 10,0;0,5;10,10\n8,4\n";
        assert_eq!(run_str(input, RingClosure::AsGiven).unwrap(), "0\n");
        assert_eq!(run_str(input, RingClosure::Close).unwrap(), "1\n");
    }

    #[test]
    fn test_crlf_input() {
        let input = SCENARIO.replace('\n', "\r\n");
        assert_eq!(run_str(&input, RingClosure::AsGiven).unwrap(), "1\n2\n0\n");
    }

    #[test]
    fn test_empty_input() {
        let err = run_str("", RingClosure::AsGiven).unwrap_err();
        assert!(matches!(err, InputError::MalformedHeader { line: 1, .. }));
    }

    #[test]
    fn test_zero_queries() {
        assert_eq!(run_str("1 0\n1 0,0;0,1;1,1\n", RingClosure::AsGiven).unwrap(), "");
    }

    #[test]
    fn test_errors_name_the_offending_line() {
        let bad_point = "1 2\n1 0,0;0,10;10,10;10,0\n1,1\noops\n";
        let err = run_str(bad_point, RingClosure::AsGiven).unwrap_err();
        assert!(matches!(err, InputError::MalformedPointLine { line: 4, .. }));

        let bad_polygon = "2 1\n1 0,0;0,10;10,10;10,0\n2 5,5;5\n1,1\n";
        let err = run_str(bad_polygon, RingClosure::AsGiven).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_bad_input_writes_nothing() {
        let mut out = Vec::new();
        let input = "1 2\n1 0,0;0,10;10,10;10,0\n1,1\n2;2\n";
        assert!(run(input.as_bytes(), &mut out, RingClosure::AsGiven).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_duplicate_and_reserved_ids() {
        let dup = "2 0\n1 0,0;0,1;1,1\n1 2,2;2,3;3,3\n";
        let err = run_str(dup, RingClosure::AsGiven).unwrap_err();
        assert!(matches!(
            err,
            InputError::Registry {
                line: 3,
                source: crate::error::RegistryError::DuplicateId(1)
            }
        ));

        let reserved = "1 0\n0 0,0;0,1;1,1\n";
        let err = run_str(reserved, RingClosure::AsGiven).unwrap_err();
        assert!(matches!(err, InputError::Registry { line: 2, .. }));
    }

    #[test]
    fn test_truncated_input() {
        let err = run_str("2 1\n1 0,0;0,1;1,1\n", RingClosure::AsGiven).unwrap_err();
        assert!(matches!(
            err,
            InputError::UnexpectedEof {
                expected: 2,
                found: 1,
                what: "polygon lines"
            }
        ));

        let err = run_str("1 3\n1 0,0;0,1;1,1\n0.5,0.5\n", RingClosure::AsGiven).unwrap_err();
        assert!(matches!(
            err,
            InputError::UnexpectedEof {
                expected: 3,
                found: 1,
                what: "point lines"
            }
        ));
    }

    #[test]
    fn test_oversized_header_counts() {
        let input = format!("{} 1\n1 0,0;0,1;1,1\n", usize::MAX);
        let err = run_str(&input, RingClosure::AsGiven).unwrap_err();
        assert!(matches!(
            err,
            InputError::UnexpectedEof {
                expected: usize::MAX,
                found: 1,
                what: "polygon lines"
            }
        ));

        let err = run_str("1 1000000000000\n1 0,0;0,1;1,1\n", RingClosure::AsGiven).unwrap_err();
        assert!(matches!(
            err,
            InputError::UnexpectedEof {
                expected: 1_000_000_000_000,
                found: 0,
                what: "point lines"
            }
        ));
    }

    #[test]
    fn test_invalid_utf8_names_the_line() {
        let input: &[u8] = b"1 2\n1 0,0;0,10;10,10;10,0\n1,1\n\xff,2\n";
        let mut out = Vec::new();
        let err = run(input, &mut out, RingClosure::AsGiven).unwrap_err();
        assert!(matches!(err, InputError::Read { line: 4, .. }));
        assert_eq!(err.line(), Some(4));
        assert!(out.is_empty());
    }

    #[test]
    fn test_unreadable_trailing_line_is_not_fatal() {
        let mut input = SCENARIO.as_bytes().to_vec();
        input.extend_from_slice(b"\xfe\xff\n");
        let mut out = Vec::new();
        run(input.as_slice(), &mut out, RingClosure::AsGiven).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n0\n");
    }

    #[test]
    fn test_trailing_lines_are_not_classified() {
        let input = format!("{SCENARIO}3,3\n");
        assert_eq!(run_str(&input, RingClosure::AsGiven).unwrap(), "1\n2\n0\n");
    }

    #[test]
    fn test_stats_counts() {
        let mut out = Vec::new();
        let stats = run(SCENARIO.as_bytes(), &mut out, RingClosure::AsGiven).unwrap();
        assert_eq!(stats.polygons, 2);
        assert_eq!(stats.points, 3);
        assert!(stats.total() >= stats.encode);
        assert_eq!(RunStats::default().per_query(), Duration::ZERO);
    }
}

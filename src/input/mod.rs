//! Line-oriented batch input and output.
//!
//! Format:
//!
//! ```text
//! M N
//! <id> <x,y;x,y;...>     (M lines)
//! <x>,<y>                (N lines)
//! ```
//!
//! Output is one polygon id per query point, `0` when nothing contains it.

mod batch;
mod parse;

pub use batch::{read_batch, run, write_results, Batch, RunStats};
pub use parse::{parse_header, parse_point_line, parse_polygon_line};

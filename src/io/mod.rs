//! Boundary I/O: loading a bipartite graph from disk and writing back
//! a solved matching.
//!
//! Kept deliberately thin — format parsing/writing only, no algorithmic
//! decisions — so the solver types stay agnostic of file formats.

pub mod binary;
pub mod text;

use crate::error::{Error, Result};
use crate::graph::{CostType, Graph};
use crate::solver::AuctionSolver;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load a graph from `path`, selecting the format by extension: `.txt`
/// is the text format, anything else (canonically `.wbg`) is the
/// big-endian binary format.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be opened or
/// is malformed for the selected format.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "txt") {
        text::read(BufReader::new(file))
    } else {
        binary::read(BufReader::new(file))
    }
}

/// Write a solved matching to `path` in the text output format:
///
/// ```text
/// cost <integer>
/// time <seconds, 6 decimals>
/// <person>,<object>,<cost>
/// ...
/// ```
///
/// One line per object, in index order.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be written,
/// or if any object is unmatched (a solved instance on a feasible graph
/// never leaves an object unmatched; an unmatched object here indicates
/// the solver was not run to completion).
pub fn write_matching(path: impl AsRef<Path>, solver: &AuctionSolver) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "cost {}", solver.matching_cost())?;
    writeln!(writer, "time {:.6}", solver.solving_time().as_secs_f64())?;
    for (object, (&person, &cost)) in solver
        .matching()
        .iter()
        .zip(solver.matching_costs())
        .enumerate()
    {
        let person = person.ok_or_else(|| {
            crate::error::Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("object {object} is unmatched, refusing to write an incomplete matching"),
            ))
        })?;
        writeln!(writer, "{person},{object},{cost}")?;
    }
    Ok(())
}

/// Read back a matching previously written by [`write_matching`],
/// returning the total cost and the `(person, object, cost)` triples in
/// object index order.
///
/// Exists primarily to support round-trip testing of the output format;
/// the CLI itself only ever writes this format.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read or
/// does not conform to the documented format.
pub fn read_matching(path: impl AsRef<Path>) -> Result<(i64, Vec<(usize, usize, CostType)>)> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    let malformed = |msg: &str| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            msg.to_string(),
        ))
    };

    let cost_line = lines.next().ok_or_else(|| malformed("missing cost line"))??;
    let cost: i64 = cost_line
        .strip_prefix("cost ")
        .ok_or_else(|| malformed("expected 'cost <n>' line"))?
        .parse()
        .map_err(|_| malformed("cost is not an integer"))?;

    let time_line = lines.next().ok_or_else(|| malformed("missing time line"))??;
    if !time_line.starts_with("time ") {
        return Err(malformed("expected 'time <seconds>' line"));
    }

    let mut edges = Vec::new();
    for line in lines {
        let line = line?;
        let fields: Vec<&str> = line.split(',').collect();
        let [p, o, c] = fields.as_slice() else {
            return Err(malformed("expected 'person,object,cost'"));
        };
        let person: usize = p.parse().map_err(|_| malformed("bad person index"))?;
        let object: usize = o.parse().map_err(|_| malformed("bad object index"))?;
        let cost: CostType = c.parse().map_err(|_| malformed("bad edge cost"))?;
        edges.push((person, object, cost));
    }

    Ok((cost, edges))
}

/// Strip the extension from `path` and append `_matching.txt`, giving
/// the name of the sibling file the CLI writes its result to.
#[must_use]
pub fn matching_output_path(path: impl AsRef<Path>) -> std::path::PathBuf {
    let path = path.as_ref();
    let stem = path.with_extension("");
    let mut name = stem.into_os_string();
    name.push("_matching.txt");
    name.into()
}

//! Plain-text graph format.
//!
//! ```text
//! persons <N>
//! objects <M>
//! <p0> <o0> <c0>
//! <p1> <o1> <c1>
//! ...
//! ```
//!
//! Edges are separated by any of space, comma, `\r`, `\n`, and must be
//! sorted so that all edges of a given person are contiguous — the
//! loader batches by person and does not repair an out-of-order file.

use crate::error::{Error, Result};
use crate::graph::{CostType, Graph, Person};
use std::io::BufRead;

fn format_error(message: impl Into<String>) -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        message.into(),
    ))
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ' ' || c == ',' || c == '\r' || c == '\n')
        .filter(|f| !f.is_empty())
        .collect()
}

fn parse_header(line: &str, label: &str) -> Result<usize> {
    let fields = split_fields(line);
    match fields.as_slice() {
        [got_label, value] if *got_label == label => value
            .parse()
            .map_err(|_| format_error(format!("expected an integer after '{label}', got '{value}'"))),
        _ => Err(format_error(format!(
            "expected a '{label} <N>' header line, got '{line}'"
        ))),
    }
}

/// Read a graph from the text format.
///
/// # Errors
///
/// Returns [`Error::Io`] if the header lines are malformed, an edge
/// line does not contain exactly three integers, or `objects != persons`.
pub fn read(reader: impl BufRead) -> Result<Graph> {
    let mut lines = reader.lines();

    let persons_line = lines
        .next()
        .ok_or_else(|| format_error("missing 'persons <N>' header"))??;
    let num_persons = parse_header(&persons_line, "persons")?;

    let objects_line = lines
        .next()
        .ok_or_else(|| format_error("missing 'objects <M>' header"))??;
    let num_objects = parse_header(&objects_line, "objects")?;

    if num_objects != num_persons {
        return Err(format_error(format!(
            "objects ({num_objects}) != persons ({num_persons})"
        )));
    }

    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); num_persons];
    let mut costs: Vec<Vec<CostType>> = vec![Vec::new(); num_persons];

    for line in lines {
        let line = line?;
        let fields = split_fields(&line);
        if fields.is_empty() {
            continue;
        }
        let [p, o, c] = fields.as_slice() else {
            return Err(format_error(format!(
                "expected 'person object cost', got '{line}'"
            )));
        };
        let person: usize = p
            .parse()
            .map_err(|_| format_error(format!("expected an integer person index, got '{p}'")))?;
        let object: usize = o
            .parse()
            .map_err(|_| format_error(format!("expected an integer object index, got '{o}'")))?;
        let cost: CostType = c
            .parse()
            .map_err(|_| format_error(format!("expected an integer cost, got '{c}'")))?;

        let bucket = neighbors
            .get_mut(person)
            .ok_or_else(|| format_error(format!("person index {person} out of range")))?;
        bucket.push(object);
        costs[person].push(cost);
    }

    let persons = neighbors
        .into_iter()
        .zip(costs)
        .map(|(n, c)| Person::new(n, c))
        .collect();
    Ok(Graph::new(persons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_header_and_edges() {
        let text = "persons 2\nobjects 2\n0,0,1\n0,1,10\n1,0,10\n1,1,1\n";
        let graph = read(Cursor::new(text)).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph[0].neighbors(), &[0, 1]);
        assert_eq!(graph[0].costs(), &[1, 10]);
        assert_eq!(graph[1].neighbors(), &[0, 1]);
        assert_eq!(graph[1].costs(), &[10, 1]);
    }

    #[test]
    fn accepts_mixed_separators() {
        let text = "persons 1\nobjects 1\n0 0, 5\r\n";
        let graph = read(Cursor::new(text)).unwrap();
        assert_eq!(graph[0].neighbors(), &[0]);
        assert_eq!(graph[0].costs(), &[5]);
    }

    #[test]
    fn rejects_unbalanced_header() {
        let text = "persons 2\nobjects 3\n";
        assert!(read(Cursor::new(text)).is_err());
    }

    #[test]
    fn rejects_malformed_edge_line() {
        let text = "persons 1\nobjects 1\n0 0\n";
        assert!(read(Cursor::new(text)).is_err());
    }
}

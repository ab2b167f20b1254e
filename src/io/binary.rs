//! Big-endian binary graph format (`.wbg`).
//!
//! Layout: `int32 N_persons`, `int32 N_objects` (must equal
//! `N_persons`), then for each person an `int32 num_neighbors` followed
//! by that many `(int32 neighbor_index, int32 edge_cost)` pairs. All
//! integers are 32-bit signed, big-endian; [`byteorder`] handles the
//! swap on little-endian hosts so no manual byte shuffling is needed.

use crate::error::{Error, Result};
use crate::graph::{Graph, Person};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Read a graph from a big-endian `.wbg` stream.
///
/// # Errors
///
/// Returns [`Error::Io`] on a truncated stream or on `N_objects !=
/// N_persons`.
pub fn read(mut reader: impl Read) -> Result<Graph> {
    let num_persons = reader.read_i32::<BigEndian>()?;
    let num_objects = reader.read_i32::<BigEndian>()?;
    if num_persons != num_objects {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("N_persons ({num_persons}) != N_objects ({num_objects})"),
        )));
    }
    let num_persons = usize::try_from(num_persons).map_err(|_| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "N_persons must be non-negative",
        ))
    })?;

    let mut persons = Vec::with_capacity(num_persons);
    for _ in 0..num_persons {
        let num_neighbors = reader.read_i32::<BigEndian>()?;
        let num_neighbors = usize::try_from(num_neighbors).map_err(|_| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "num_neighbors must be non-negative",
            ))
        })?;
        let mut neighbors = Vec::with_capacity(num_neighbors);
        let mut costs = Vec::with_capacity(num_neighbors);
        for _ in 0..num_neighbors {
            let neighbor = reader.read_i32::<BigEndian>()?;
            let cost = reader.read_i32::<BigEndian>()?;
            neighbors.push(usize::try_from(neighbor).map_err(|_| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "neighbor index must be non-negative",
                ))
            })?);
            costs.push(cost);
        }
        persons.push(Person::new(neighbors, costs));
    }

    Ok(Graph::new(persons))
}

/// Write a graph to a big-endian `.wbg` stream. Provided mostly for
/// round-trip testing; the CLI only ever reads graphs.
///
/// # Errors
///
/// Returns [`Error::Io`] if any person or object index does not fit in
/// an `i32`, or if the underlying writer fails.
pub fn write(mut writer: impl Write, graph: &Graph) -> Result<()> {
    let n = i32::try_from(graph.len()).map_err(|_| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "graph too large to serialize to the binary format",
        ))
    })?;
    writer.write_i32::<BigEndian>(n)?;
    writer.write_i32::<BigEndian>(n)?;
    for person in graph.persons() {
        writer.write_i32::<BigEndian>(i32::try_from(person.num_neighbors()).unwrap())?;
        for (&neighbor, &cost) in person.neighbors().iter().zip(person.costs()) {
            writer.write_i32::<BigEndian>(i32::try_from(neighbor).unwrap())?;
            writer.write_i32::<BigEndian>(cost)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trips_a_small_graph() {
        let graph = Graph::new(vec![
            Person::new(vec![0, 1], vec![-5, 3]),
            Person::new(vec![1], vec![7]),
        ]);
        let mut buf = Vec::new();
        write(&mut buf, &graph).unwrap();
        let decoded = read(Cursor::new(buf)).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].neighbors(), &[0, 1]);
        assert_eq!(decoded[0].costs(), &[-5, 3]);
        assert_eq!(decoded[1].neighbors(), &[1]);
        assert_eq!(decoded[1].costs(), &[7]);
    }

    #[test]
    fn rejects_unbalanced_graph() {
        let mut buf = Vec::new();
        buf.write_i32::<BigEndian>(2).unwrap();
        buf.write_i32::<BigEndian>(3).unwrap();
        let err = read(Cursor::new(buf)).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

//! Adjacency-list representation of the person side of the bipartite
//! graph, and the `UNMATCHED` sentinel.

/// The edge-cost scalar type. Must accommodate at least 32-bit signed
/// costs per the data model.
pub type CostType = i32;

/// One person vertex: its neighboring objects and the parallel edge
/// costs to reach them.
///
/// Populated once at load time and read-only afterward. `neighbors` and
/// `costs` always have the same length.
#[derive(Debug, Clone, Default)]
pub struct Person {
    neighbors: Vec<usize>,
    costs: Vec<CostType>,
}

impl Person {
    /// Build a person from parallel neighbor/cost sequences.
    ///
    /// # Panics
    ///
    /// Panics if `neighbors.len() != costs.len()`, which would violate
    /// the data model's invariant.
    #[must_use]
    pub fn new(neighbors: Vec<usize>, costs: Vec<CostType>) -> Self {
        assert_eq!(
            neighbors.len(),
            costs.len(),
            "a person's neighbors and costs sequences must have the same length"
        );
        Self { neighbors, costs }
    }

    /// The number of neighbors (edges) this person has.
    #[must_use]
    pub fn num_neighbors(&self) -> usize {
        self.neighbors.len()
    }

    /// The object indices this person has an edge to, in adjacency
    /// order.
    #[must_use]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// The edge costs, parallel to [`Person::neighbors`].
    #[must_use]
    pub fn costs(&self) -> &[CostType] {
        &self.costs
    }
}

/// An ordered sequence of `N` [`Person`]s, indexed `0..N`.
///
/// The graph need not be complete; a person may have any number of
/// neighbors greater than or equal to one. Feasibility (the existence of
/// a perfect matching) is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    persons: Vec<Person>,
}

impl Graph {
    /// Build a graph from a vector of persons.
    #[must_use]
    pub const fn new(persons: Vec<Person>) -> Self {
        Self { persons }
    }

    /// The number of persons (and, since the graph is square, objects).
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether the graph has no persons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Access the persons as a slice.
    #[must_use]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// The maximum absolute edge cost over the whole graph, or `0` if
    /// the graph has no edges.
    #[must_use]
    pub fn max_abs_cost(&self) -> CostType {
        self.persons
            .iter()
            .flat_map(|p| p.costs().iter())
            .map(|&c| c.unsigned_abs())
            .max()
            .map_or(0, |c| CostType::try_from(c).unwrap_or(CostType::MAX))
    }
}

impl std::ops::Index<usize> for Graph {
    type Output = Person;

    fn index(&self, index: usize) -> &Person {
        &self.persons[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_abs_cost_over_empty_graph_is_zero() {
        let graph = Graph::new(vec![]);
        assert_eq!(graph.max_abs_cost(), 0);
    }

    #[test]
    fn max_abs_cost_considers_negative_costs() {
        let graph = Graph::new(vec![
            Person::new(vec![0, 1], vec![-5, 3]),
            Person::new(vec![0], vec![-10]),
        ]);
        assert_eq!(graph.max_abs_cost(), 10);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_neighbor_and_cost_lengths_panics() {
        let _ = Person::new(vec![0, 1], vec![1]);
    }
}

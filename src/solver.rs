//! The ε-scaling auction algorithm: the solver's price vector, matching,
//! unmatched-person work queue, and the bidding loop that ties them
//! together.
//!
//! This is the part of the crate that matters. Everything else (I/O,
//! the CLI) exists to get a [`crate::graph::Graph`] in and a matching
//! out.

use crate::deque::BoundedDeque;
use crate::error::{Error, Result};
use crate::graph::{CostType, Graph};
use log::{debug, trace};
use std::time::{Duration, Instant};

/// Sentinel value for an object with no assigned person, and the
/// inverse: a person with no assigned object.
///
/// The source uses `INT32_MAX` for this; the Rust rewrite uses a proper
/// `Option<usize>` instead (see spec's design notes on global
/// sentinels), so this constant only documents the convention rather
/// than appearing in any field type.
pub const UNMATCHED: Option<usize> = None;

/// Owns an instance of the assignment problem and the auction
/// algorithm's working state.
///
/// Lifecycle: [`AuctionSolver::new`] (zeroed defaults) → [`load_graph`]
/// → [`solve`] → read results via the accessors → [`clear`]. `clear` is
/// idempotent and safe to call on a partially-populated instance.
///
/// [`load_graph`]: AuctionSolver::load_graph
/// [`solve`]: AuctionSolver::solve
/// [`clear`]: AuctionSolver::clear
#[derive(Debug, Default)]
pub struct AuctionSolver {
    graph: Graph,
    max_abs_cost: CostType,
    prices: Vec<f64>,
    matching: Vec<Option<usize>>,
    matching_costs: Vec<CostType>,
    unmatched_persons: BoundedDeque,
    matching_cost: i64,
    solving_time: Duration,
}

impl AuctionSolver {
    /// Construct an empty solver with all fields at safe defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a graph into the solver, computing `max_abs_cost` from its
    /// edges.
    ///
    /// Replaces any previously loaded graph and solved state.
    pub fn load_graph(&mut self, graph: Graph) {
        self.max_abs_cost = graph.max_abs_cost();
        self.graph = graph;
        self.prices.clear();
        self.matching.clear();
        self.matching_costs.clear();
        self.unmatched_persons.clear();
        self.matching_cost = 0;
        self.solving_time = Duration::ZERO;
    }

    /// The number of persons (equivalently, objects) in the loaded
    /// graph.
    #[must_use]
    pub fn num_persons(&self) -> usize {
        self.graph.len()
    }

    /// The maximum absolute edge cost observed while loading the graph.
    ///
    /// A reasonable default for `initial_epsilon`, though the algorithm
    /// does not require it.
    #[must_use]
    pub const fn max_abs_cost(&self) -> CostType {
        self.max_abs_cost
    }

    /// The object → person matching, one entry per object, in index
    /// order.
    #[must_use]
    pub fn matching(&self) -> &[Option<usize>] {
        &self.matching
    }

    /// The edge cost of each matched pair, parallel to [`matching`].
    /// Zero for an unmatched object.
    ///
    /// [`matching`]: AuctionSolver::matching
    #[must_use]
    pub fn matching_costs(&self) -> &[CostType] {
        &self.matching_costs
    }

    /// The final price of every object.
    #[must_use]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// The total cost of the matching found by the last [`solve`] call.
    ///
    /// [`solve`]: AuctionSolver::solve
    #[must_use]
    pub const fn matching_cost(&self) -> i64 {
        self.matching_cost
    }

    /// Wall-clock time spent in the last [`solve`] call.
    ///
    /// [`solve`]: AuctionSolver::solve
    #[must_use]
    pub const fn solving_time(&self) -> Duration {
        self.solving_time
    }

    /// Release all owned memory and return to defaults. Safe to call on
    /// a partially-populated instance, and idempotent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Find a matching and prices that satisfy the ε-complementary
    /// slackness condition for `epsilon = final_epsilon`, via ε-scaling
    /// from `initial_epsilon` down by factor `alpha` per phase.
    ///
    /// If `final_epsilon` is `0.0`, uses `1 / (N + 2)`, the theoretical
    /// threshold below which an ε-CS matching on integer costs is an
    /// exact optimum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadInput`] if the graph is empty, or if either
    /// ε value is negative. Returns [`Error::AllocationFailure`] if the
    /// auxiliary buffers could not be acquired. On any error the solver
    /// is cleared before returning, so no partial result is ever
    /// exposed.
    pub fn solve(&mut self, initial_epsilon: f64, alpha: f64, final_epsilon: f64) -> Result<()> {
        let n = self.graph.len();
        if n == 0 {
            return Err(Error::BadInput(
                "the graph can not be empty or unbalanced".into(),
            ));
        }
        if initial_epsilon < 0.0 || final_epsilon < 0.0 {
            return Err(Error::BadInput(
                "the initial and final values for epsilon can not be negative".into(),
            ));
        }

        if let Err(e) = self.allocate_working_state(n) {
            self.clear();
            return Err(e);
        }

        let final_epsilon = if final_epsilon == 0.0 {
            1.0 / (n as f64 + 2.0)
        } else {
            final_epsilon
        };

        let start = Instant::now();

        let mut epsilon = initial_epsilon;
        let mut full_reset = true;
        loop {
            epsilon = (epsilon / alpha).max(final_epsilon);
            debug!("scaling phase: epsilon={epsilon}");

            if full_reset {
                self.full_reset();
                full_reset = false;
            } else {
                self.partial_reset(epsilon);
            }

            if let Err(e) = self.eps_optimal_matching(epsilon) {
                self.clear();
                return Err(e);
            }

            if epsilon <= final_epsilon {
                break;
            }
        }

        self.solving_time = start.elapsed();
        self.matching_cost = self.matching_costs.iter().map(|&c| i64::from(c)).sum();

        Ok(())
    }

    fn allocate_working_state(&mut self, n: usize) -> Result<()> {
        self.prices = vec![0.0; n];
        self.matching = vec![None; n];
        self.matching_costs = vec![0; n];
        self.unmatched_persons.allocate(n)
    }

    /// Discard the matching entirely and enqueue every person. Used for
    /// the very first scaling phase.
    fn full_reset(&mut self) {
        self.matching.iter_mut().for_each(|m| *m = None);
        self.matching_costs.iter_mut().for_each(|c| *c = 0);
        self.unmatched_persons.reset();
        for person in 0..self.graph.len() {
            self.unmatched_persons.push_back(person);
        }
    }

    /// Keep matched edges that still satisfy ε-CS with the new,
    /// smaller, `epsilon`; re-enqueue the persons whose edge no longer
    /// does. Prices are left untouched: they carry across phases, which
    /// is what makes ε-scaling an amortized algorithm rather than a
    /// from-scratch solve at every phase.
    fn partial_reset(&mut self, epsilon: f64) {
        for object in 0..self.graph.len() {
            let Some(person) = self.matching[object] else {
                continue;
            };
            let p = &self.graph[person];
            let mut min_reduced_cost = f64::INFINITY;
            let mut match_reduced_cost = None;
            for (&neighbor, &cost) in p.neighbors().iter().zip(p.costs()) {
                let reduced_cost = f64::from(cost) - self.prices[neighbor];
                if neighbor == object {
                    match_reduced_cost = Some(reduced_cost);
                }
                min_reduced_cost = min_reduced_cost.min(reduced_cost);
            }
            let match_reduced_cost = match_reduced_cost
                .expect("a matched object must appear in its person's adjacency list");

            if match_reduced_cost > min_reduced_cost + epsilon {
                self.matching_cost -= i64::from(self.matching_costs[object]);
                self.matching[object] = None;
                self.matching_costs[object] = 0;
                self.unmatched_persons.push_back(person);
            }
        }
    }

    /// Drain the unmatched-person deque, having each person bid on its
    /// best object and displace the incumbent, until every person is
    /// matched.
    fn eps_optimal_matching(&mut self, epsilon: f64) -> Result<()> {
        let mut bids = 0u64;
        while !self.unmatched_persons.is_empty() {
            let person = self.unmatched_persons.pop_back()?;
            let (best_object, gamma, cost_of_best) = self.find_best_object(person);

            if let Some(incumbent) = self.matching[best_object] {
                self.unmatched_persons.push_back(incumbent);
            }
            self.matching[best_object] = Some(person);
            self.matching_costs[best_object] = cost_of_best;
            self.prices[best_object] -= gamma + epsilon;
            bids += 1;
        }
        trace!("phase at epsilon={epsilon} settled in {bids} bids");
        Ok(())
    }

    /// Scan `person`'s adjacency list for the object of minimum reduced
    /// cost (`cost - price`) and the second-minimum, returning
    /// `(best_object, gamma, cost_of_best_object)` where
    /// `gamma = second_best_reduced_cost - best_reduced_cost`.
    ///
    /// If `person` has exactly one neighbor, that neighbor wins
    /// trivially and `gamma` is a large sentinel: with no competing
    /// option, the bid increment is effectively unbounded.
    fn find_best_object(&self, person: usize) -> (usize, f64, CostType) {
        const NO_COMPETITION_GAMMA: f64 = 1_000_000.0;

        let p = &self.graph[person];
        debug_assert!(p.num_neighbors() > 0, "a person must have at least one neighbor");

        if p.num_neighbors() == 1 {
            return (p.neighbors()[0], NO_COMPETITION_GAMMA, p.costs()[0]);
        }

        let mut best_object = p.neighbors()[0];
        let mut best_cost = p.costs()[0];
        let mut best_reduced_cost = f64::INFINITY;
        let mut second_best_reduced_cost = f64::INFINITY;

        for (&neighbor, &cost) in p.neighbors().iter().zip(p.costs()) {
            let reduced_cost = f64::from(cost) - self.prices[neighbor];
            if reduced_cost < best_reduced_cost {
                second_best_reduced_cost = best_reduced_cost;
                best_reduced_cost = reduced_cost;
                best_object = neighbor;
                best_cost = cost;
            } else if reduced_cost < second_best_reduced_cost {
                second_best_reduced_cost = reduced_cost;
            }
        }

        (best_object, second_best_reduced_cost - best_reduced_cost, best_cost)
    }
}

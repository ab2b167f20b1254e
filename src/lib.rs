#![deny(missing_docs)]

//! ε-scaling auction algorithm (Bertsekas) for the linear Assignment
//! Problem on a balanced bipartite graph.
//!
//! Given a cost on each edge of an `N`×`N` bipartite graph of persons
//! and objects, [`solver::AuctionSolver`] finds a perfect matching that
//! minimizes total cost, or ε-optimally approximates it within a chosen
//! tolerance.
//!
//! It supports the following Cargo feature:
//!
//! - `kuhn_munkres` (default: true): include the Kuhn-Munkres
//!   (Hungarian) algorithm, used only as an independent oracle in tests
//!   and benches to cross-check the auction solver's optimality. It is
//!   not part of the auction algorithm itself.

pub extern crate num_traits;

pub mod deque;
pub mod error;
pub mod graph;
pub mod io;
#[cfg(feature = "kuhn_munkres")]
pub mod kuhn_munkres;
#[cfg(feature = "kuhn_munkres")]
pub mod matrix;
pub mod solver;

pub use deque::BoundedDeque;
pub use error::{Error, Result};
pub use graph::{CostType, Graph, Person};
pub use solver::AuctionSolver;

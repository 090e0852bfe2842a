//! Errors of the peeling algorithm.
//!
//! All variants but [DcsError::Interrupted] signal a broken internal invariant (a programming error),
//! they abort the current solve and are never retried.
//! The case where pass 2 does not reach the density found in pass 1 is not an error, it is reported
//! in the result, see [Outcome](super::peeling::Outcome).

use std::fmt;

use thiserror::Error;

/// identifies the two passes of the greedy algorithm
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PassKind {
    /// search for the highest density
    Discovery,
    /// search for a node set reaching the density found in first pass
    Recovery,
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassKind::Discovery => write!(f, "density discovery"),
            PassKind::Recovery => write!(f, "witness recovery"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DcsError {
    /// a degree or neighbour query was issued for a node absent from a graph. The node is given in Debug format.
    #[error("node {0} is not in every graph of view")]
    UnknownNode(String),
    /// min degree node asked for on an empty bucket index
    #[error("min degree node asked for on an empty degree index")]
    EmptyIndex,
    /// graphs of a multi graph view do not have the same node set any more.
    #[error("graph {graph} has diverging node set, nb nodes : {got}, expected : {expected}")]
    InconsistentNodeSet {
        /// rank of the first diverging graph
        graph: usize,
        /// node count of graph 0
        expected: usize,
        /// node count of diverging graph
        got: usize,
    },
    /// no graph was given
    #[error("no input graph")]
    NoInputGraph,
    /// the checkpoint hook asked to stop
    #[error("{pass} interrupted at iteration {iteration}")]
    Interrupted { pass: PassKind, iteration: usize },
} // end of enum DcsError

//=======================================================================================

// end of mod tests

//! Density of a graph and of a set of graphs.
//!
//! The density of a graph is its number of edges divided by its number of nodes (so half its mean degree),
//! and 0 for a graph without node. It is not the ratio of present edges to all possible pairs.
//! The density of a set of graphs sharing the same node set is the minimum of their densities.
//!
//! Densities are kept as exact fractions of integer counts so that comparisons are exact. Two densities computed
//! on the same counts are always equal, which the second pass of the peeling relies on.

use std::cmp::Ordering;
use std::fmt;

use super::multiview::MultiGraphView;
use crate::graph::PeelGraph;

/// A density as the fraction edges / nodes.
#[derive(Copy, Clone, Debug)]
pub struct Density {
    edges: usize,
    nodes: usize,
} // end of struct Density

impl Density {
    /// a density with nodes = 0 is 0
    pub fn new(edges: usize, nodes: usize) -> Self {
        if nodes == 0 {
            Density::zero()
        } else {
            Density { edges, nodes }
        }
    }

    pub fn zero() -> Self {
        Density { edges: 0, nodes: 1 }
    }

    /// returns the density as a f64
    pub fn value(&self) -> f64 {
        self.edges as f64 / self.nodes as f64
    }
} // end of impl Density

impl Default for Density {
    fn default() -> Self {
        Density::zero()
    }
}

impl Ord for Density {
    fn cmp(&self, other: &Self) -> Ordering {
        // a/b <=> c/d with b,d > 0 is a*d <=> c*b
        let left = self.edges as u128 * other.nodes as u128;
        let right = other.edges as u128 * self.nodes as u128;
        left.cmp(&right)
    }
}

impl PartialOrd for Density {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Density {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Density {}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// density of one graph
pub fn density<G: PeelGraph>(graph: &G) -> Density {
    Density::new(graph.edge_count(), graph.node_count())
}

/// density of a view : minimum of the densities of its graphs. 0 if view has no graph.
pub fn multi_graph_density<G: PeelGraph>(view: &MultiGraphView<G>) -> Density {
    view.graphs().iter().map(density).min().unwrap_or_default()
}

//=======================================================================================

// end of mod tests

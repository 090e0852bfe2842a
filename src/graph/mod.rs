//! The graph capability consumed by the peeling algorithm.
//!
//! The algorithm never looks at a concrete graph representation, it only needs node/edge counts,
//! degree and neighbour queries and node deletion. These operations are gathered in the trait [PeelGraph].
//!
//! The trait is implemented for :
//! - petgraph [GraphMap] with undirected edges, which is what the csv loader returns.
//! - [IdGraph](idgraph::IdGraph), a petgraph StableGraph with an explicit map from node id to NodeIndex.
//!

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use petgraph::graphmap::{GraphMap, NodeTrait};
use petgraph::Undirected;

/// A graph with node identifiers stable under deletion.
pub mod idgraph;
pub use idgraph::IdGraph;

/// Operations needed on each graph by the peeling algorithm.
///
/// Edges are undirected, node identifiers are unique and remain valid as long as the node is not deleted.
/// Implementations should answer degree and neighbour queries without scanning the whole graph.
pub trait PeelGraph: Clone {
    /// node identifier, must be shared by all graphs of a multi-graph problem.
    type Node: Copy + Eq + Hash + Ord + Debug;

    /// number of nodes currently in graph
    fn node_count(&self) -> usize;

    /// number of edges currently in graph
    fn edge_count(&self) -> usize;

    ///
    fn contains_node(&self, node: Self::Node) -> bool;

    /// returns None if node is not in graph
    fn degree(&self, node: Self::Node) -> Option<usize>;

    /// neighbours of node, None if node is not in graph
    fn neighbors(&self, node: Self::Node) -> Option<Vec<Self::Node>>;

    /// all nodes currently in graph, in a deterministic order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// removes node and its incident edges. Returns false if node was not present.
    fn remove_node(&mut self, node: Self::Node) -> bool;

    /// makes the graph the subgraph induced by keep: every node not in keep is deleted.
    /// Nodes of keep not in the graph are ignored.
    fn retain_nodes(&mut self, keep: &IndexSet<Self::Node>) {
        // collect first, we must not delete while iterating
        let to_remove: Vec<Self::Node> = self
            .nodes()
            .into_iter()
            .filter(|n| !keep.contains(n))
            .collect();
        log::trace!("retain_nodes deleting {} nodes", to_remove.len());
        for n in to_remove {
            self.remove_node(n);
        }
    } // end of retain_nodes
} // end of trait PeelGraph

//=======================================================================================

impl<N, E> PeelGraph for GraphMap<N, E, Undirected>
where
    N: NodeTrait + Debug,
    E: Clone,
{
    type Node = N;

    fn node_count(&self) -> usize {
        GraphMap::node_count(self)
    }

    fn edge_count(&self) -> usize {
        GraphMap::edge_count(self)
    }

    fn contains_node(&self, node: N) -> bool {
        GraphMap::contains_node(self, node)
    }

    fn degree(&self, node: N) -> Option<usize> {
        if !GraphMap::contains_node(self, node) {
            return None;
        }
        Some(GraphMap::neighbors(self, node).count())
    }

    fn neighbors(&self, node: N) -> Option<Vec<N>> {
        if !GraphMap::contains_node(self, node) {
            return None;
        }
        Some(GraphMap::neighbors(self, node).collect())
    }

    fn nodes(&self) -> Vec<N> {
        GraphMap::nodes(self).collect()
    }

    fn remove_node(&mut self, node: N) -> bool {
        GraphMap::remove_node(self, node)
    }
} // end of impl PeelGraph for GraphMap

//=======================================================================================

// end of mod tests

//! An undirected petgraph StableGraph whose nodes carry an external u32 identifier.
//!
//! A StableGraph keeps NodeIndex valid when nodes are deleted, so we just need to store the
//! correspondance between the node id (as given in a data file) and the NodeIndex in graph.

use indexmap::IndexMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Undirected;

use super::PeelGraph;

/// Undirected graph with nodes identified by a u32. E is the data attached to edges.
#[derive(Clone, Debug)]
pub struct IdGraph<E> {
    /// node weight is the node id
    graph: StableGraph<u32, E, Undirected>,
    /// given a node id get the NodeIndex in graph
    idtoidx: IndexMap<u32, NodeIndex>,
} // end of struct IdGraph

impl<E> IdGraph<E> {
    pub fn new() -> Self {
        IdGraph {
            graph: StableGraph::default(),
            idtoidx: IndexMap::new(),
        }
    }

    pub fn with_capacity(nb_nodes: usize, nb_edges: usize) -> Self {
        IdGraph {
            graph: StableGraph::with_capacity(nb_nodes, nb_edges),
            idtoidx: IndexMap::with_capacity(nb_nodes),
        }
    }

    /// adds node if not already present and returns its NodeIndex
    pub fn add_node(&mut self, id: u32) -> NodeIndex {
        if let Some(idx) = self.idtoidx.get(&id) {
            return *idx;
        }
        let idx = self.graph.add_node(id);
        self.idtoidx.insert(id, idx);
        idx
    }

    /// adds an edge between node a and b, creating nodes if necessary.
    /// If the edge already exists its data is replaced, so there is at most one edge between 2 nodes.
    pub fn add_edge(&mut self, a: u32, b: u32, data: E) {
        let idx_a = self.add_node(a);
        let idx_b = self.add_node(b);
        self.graph.update_edge(idx_a, idx_b, data);
    }

    /// get NodeIndex from id
    pub fn get_nodeindex(&self, id: u32) -> Option<&NodeIndex> {
        self.idtoidx.get(&id)
    }

    /// access to the underlying petgraph structure
    pub fn get_graph(&self) -> &StableGraph<u32, E, Undirected> {
        &self.graph
    }
} // end of impl IdGraph

impl<E: Default> IdGraph<E> {
    /// builds a graph from a list of edges given by node ids
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let edges = edges.into_iter();
        let (nb_edges, _) = edges.size_hint();
        let mut graph = IdGraph::with_capacity(nb_edges, nb_edges);
        for (a, b) in edges {
            graph.add_edge(a, b, E::default());
        }
        graph
    }
} // end of impl IdGraph

impl<E> Default for IdGraph<E> {
    fn default() -> Self {
        IdGraph::new()
    }
}

impl<E: Clone> PeelGraph for IdGraph<E> {
    type Node = u32;

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn contains_node(&self, node: u32) -> bool {
        self.idtoidx.contains_key(&node)
    }

    fn degree(&self, node: u32) -> Option<usize> {
        let idx = self.idtoidx.get(&node)?;
        Some(self.graph.neighbors(*idx).count())
    }

    fn neighbors(&self, node: u32) -> Option<Vec<u32>> {
        let idx = self.idtoidx.get(&node)?;
        Some(self.graph.neighbors(*idx).map(|n| self.graph[n]).collect())
    }

    fn nodes(&self) -> Vec<u32> {
        self.idtoidx.keys().copied().collect()
    }

    fn remove_node(&mut self, node: u32) -> bool {
        match self.idtoidx.swap_remove(&node) {
            Some(idx) => self.graph.remove_node(idx).is_some(),
            None => false,
        }
    }
} // end of impl PeelGraph for IdGraph

//=======================================================================================

// end of mod tests

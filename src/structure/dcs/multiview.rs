//! A set of graphs sharing the same node set.
//!
//! The view owns copies of the graphs it is built from, the caller's graphs are never modified.
//! Every deletion is applied to all graphs before returning, so graphs keep the same node set at any time.
//! A divergence between node sets is an internal bug and is reported as [DcsError::InconsistentNodeSet].

use indexmap::IndexSet;

use super::error::DcsError;
use crate::graph::PeelGraph;

pub struct MultiGraphView<G: PeelGraph> {
    graphs: Vec<G>,
} // end of struct MultiGraphView

impl<G: PeelGraph> MultiGraphView<G> {
    /// clones graphs and checks they have the same node set.
    pub fn new(graphs: &[G]) -> Result<Self, DcsError> {
        let view = MultiGraphView {
            graphs: graphs.to_vec(),
        };
        view.check_synchrony()?;
        Ok(view)
    } // end of new

    /// checks that all graphs have the same node set as graph 0.
    /// This is O(k * nb_nodes), it is done on construction and after inductions, not after each deletion.
    pub fn check_synchrony(&self) -> Result<(), DcsError> {
        let reference = match self.graphs.first() {
            Some(g) => g,
            None => return Ok(()),
        };
        let expected = reference.node_count();
        let nodes = reference.nodes();
        for (rank, g) in self.graphs.iter().enumerate().skip(1) {
            let got = g.node_count();
            if got != expected || nodes.iter().any(|n| !g.contains_node(*n)) {
                log::error!(
                    "MultiGraphView graph {} node set differs from graph 0, nb nodes : {}, expected {}",
                    rank,
                    got,
                    expected
                );
                return Err(DcsError::InconsistentNodeSet {
                    graph: rank,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    } // end of check_synchrony

    /// deletes, in each graph, all nodes not in node_set.
    pub fn induce_on_node_set(&mut self, node_set: &IndexSet<G::Node>) -> Result<(), DcsError> {
        for g in self.graphs.iter_mut() {
            g.retain_nodes(node_set);
        }
        log::debug!(
            "induce_on_node_set, asked : {}, nb nodes kept : {}",
            node_set.len(),
            self.node_count()
        );
        self.check_synchrony()
    } // end of induce_on_node_set

    /// minimum over graphs of the degree of node
    pub fn min_cross_graph_degree(&self, node: G::Node) -> Result<usize, DcsError> {
        let mut min_degree = usize::MAX;
        for g in &self.graphs {
            match g.degree(node) {
                Some(d) => min_degree = min_degree.min(d),
                None => return Err(DcsError::UnknownNode(format!("{:?}", node))),
            }
        }
        if self.graphs.is_empty() {
            return Err(DcsError::UnknownNode(format!("{:?}", node)));
        }
        Ok(min_degree)
    } // end of min_cross_graph_degree

    /// union of neighbours of node in all graphs, without duplicates, in order of first occurrence.
    pub fn neighbors_across_graphs(&self, node: G::Node) -> Result<IndexSet<G::Node>, DcsError> {
        let mut neighbours = IndexSet::<G::Node>::new();
        for g in &self.graphs {
            match g.neighbors(node) {
                Some(nbgh) => neighbours.extend(nbgh),
                None => return Err(DcsError::UnknownNode(format!("{:?}", node))),
            }
        }
        Ok(neighbours)
    } // end of neighbors_across_graphs

    /// deletes node and its edges from every graph.
    pub fn remove_node(&mut self, node: G::Node) -> Result<(), DcsError> {
        for (rank, g) in self.graphs.iter_mut().enumerate() {
            if !g.remove_node(node) {
                log::error!("MultiGraphView::remove_node, node {:?} not in graph {}", node, rank);
                return Err(DcsError::InconsistentNodeSet {
                    graph: rank,
                    expected: g.node_count() + 1,
                    got: g.node_count(),
                });
            }
        }
        // cheap check of synchrony
        let expected = self.node_count();
        if let Some((rank, g)) = self
            .graphs
            .iter()
            .enumerate()
            .find(|(_, g)| g.node_count() != expected)
        {
            return Err(DcsError::InconsistentNodeSet {
                graph: rank,
                expected,
                got: g.node_count(),
            });
        }
        Ok(())
    } // end of remove_node

    /// number of nodes (common to all graphs)
    pub fn node_count(&self) -> usize {
        self.graphs.first().map_or(0, |g| g.node_count())
    }

    /// returns number of edges of graph of rank graph_index, None if there is no such graph
    pub fn edge_count(&self, graph_index: usize) -> Option<usize> {
        self.graphs.get(graph_index).map(|g| g.edge_count())
    }

    /// number of graphs in view
    pub fn nb_graphs(&self) -> usize {
        self.graphs.len()
    }

    /// the nodes of the view, in the order of graph 0
    pub fn nodes(&self) -> Vec<G::Node> {
        self.graphs.first().map_or_else(Vec::new, |g| g.nodes())
    }

    pub fn graphs(&self) -> &[G] {
        &self.graphs
    }

    pub fn into_graphs(self) -> Vec<G> {
        self.graphs
    }
} // end of impl MultiGraphView

//=======================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::graph::IdGraph;
    use petgraph::graphmap::UnGraphMap;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn view_does_not_touch_inputs() {
        log_init_test();
        //
        let g1 = UnGraphMap::<u32, ()>::from_edges(&[(1, 2), (2, 3), (3, 1)]);
        let g2 = UnGraphMap::<u32, ()>::from_edges(&[(1, 2), (2, 3)]);
        let graphs = vec![g1, g2];
        let mut view = MultiGraphView::new(&graphs).unwrap();
        assert_eq!(view.nb_graphs(), 2);
        assert_eq!(view.min_cross_graph_degree(1).unwrap(), 1);
        assert_eq!(view.min_cross_graph_degree(2).unwrap(), 2);
        let nbgh: Vec<u32> = view.neighbors_across_graphs(1).unwrap().into_iter().collect();
        assert_eq!(nbgh, vec![2, 3]);
        //
        view.remove_node(2).unwrap();
        assert_eq!(view.node_count(), 2);
        assert_eq!(view.edge_count(0), Some(1));
        assert_eq!(view.edge_count(1), Some(0));
        assert_eq!(view.edge_count(2), None);
        // originals unchanged
        assert_eq!(graphs[0].node_count(), 3);
        assert_eq!(graphs[1].edge_count(), 2);
    } // end of view_does_not_touch_inputs

    #[test]
    fn view_unknown_node() {
        log_init_test();
        //
        let g = IdGraph::<()>::from_edges(vec![(1, 2)]);
        let mut view = MultiGraphView::new(&[g]).unwrap();
        assert!(matches!(view.min_cross_graph_degree(5), Err(DcsError::UnknownNode(_))));
        assert!(matches!(view.neighbors_across_graphs(5), Err(DcsError::UnknownNode(_))));
        assert!(matches!(view.remove_node(5), Err(DcsError::InconsistentNodeSet { .. })));
    } // end of view_unknown_node

    #[test]
    fn view_rejects_diverging_graphs() {
        log_init_test();
        //
        let g1 = UnGraphMap::<u32, ()>::from_edges(&[(1, 2), (2, 3)]);
        let g2 = UnGraphMap::<u32, ()>::from_edges(&[(1, 2), (2, 4)]);
        let res = MultiGraphView::new(&[g1, g2]);
        assert!(matches!(res, Err(DcsError::InconsistentNodeSet { graph: 1, .. })));
    } // end of view_rejects_diverging_graphs

    #[test]
    fn view_induce() {
        log_init_test();
        //
        let g1 = UnGraphMap::<u32, ()>::from_edges(&[(1, 2), (2, 3), (3, 4), (4, 1)]);
        let g2 = UnGraphMap::<u32, ()>::from_edges(&[(1, 3), (2, 4), (3, 4)]);
        let mut view = MultiGraphView::new(&[g1, g2]).unwrap();
        let keep: IndexSet<u32> = [1, 3, 4].into_iter().collect();
        view.induce_on_node_set(&keep).unwrap();
        assert_eq!(view.node_count(), 3);
        assert_eq!(view.edge_count(0), Some(2));
        assert_eq!(view.edge_count(1), Some(2));
    } // end of view_induce
} // end of mod tests

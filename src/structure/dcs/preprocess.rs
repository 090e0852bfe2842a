//! Brings a set of graphs on a common node set.
//!
//! The peeling needs all graphs to share the same nodes, so with more than one graph we keep only
//! the nodes present in every graph and replace each graph by its subgraph induced on these nodes.

use indexmap::IndexSet;

use super::error::DcsError;
use crate::graph::PeelGraph;

/// returns the nodes present in all graphs, in the order of the first graph.
pub fn intersect_node_sets<G: PeelGraph>(graphs: &[G]) -> IndexSet<G::Node> {
    let mut common: IndexSet<G::Node> = match graphs.first() {
        Some(g) => g.nodes().into_iter().collect(),
        None => return IndexSet::new(),
    };
    for g in graphs.iter().skip(1) {
        common.retain(|n| g.contains_node(*n));
    }
    common
} // end of intersect_node_sets

/// restricts each graph to the subgraph induced by common nodes.
/// common must be included in each node set (as returned by [intersect_node_sets]), we check graphs end with the same number of nodes.
pub fn induce_all<G: PeelGraph>(graphs: &mut [G], common: &IndexSet<G::Node>) -> Result<(), DcsError> {
    for g in graphs.iter_mut() {
        g.retain_nodes(common);
    }
    let expected = graphs.first().map_or(0, |g| g.node_count());
    for (rank, g) in graphs.iter().enumerate() {
        if g.node_count() != expected {
            log::error!(
                "induce_all graph {} has {} nodes, expected {}",
                rank,
                g.node_count(),
                expected
            );
            return Err(DcsError::InconsistentNodeSet {
                graph: rank,
                expected,
                got: g.node_count(),
            });
        }
    }
    Ok(())
} // end of induce_all

/// restricts graphs to their common nodes. Nothing is done for less than 2 graphs.
/// Returns the number of common nodes.
pub fn preprocess<G: PeelGraph>(graphs: &mut [G]) -> Result<usize, DcsError> {
    if graphs.len() <= 1 {
        return Ok(graphs.first().map_or(0, |g| g.node_count()));
    }
    let common = intersect_node_sets(graphs);
    log::info!(
        "preprocess, {} nodes are common to all {} graphs",
        common.len(),
        graphs.len()
    );
    induce_all(graphs, &common)?;
    for (rank, g) in graphs.iter().enumerate() {
        log::debug!(
            "graph {} after preprocessing nb nodes : {}, nb edges : {}",
            rank,
            g.node_count(),
            g.edge_count()
        );
    }
    Ok(common.len())
} // end of preprocess

//=======================================================================================

// end of mod tests

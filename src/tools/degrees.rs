//! degree statistics of the node set returned by the peeling

use anyhow::anyhow;

use hdrhistogram::Histogram;

use crate::graph::PeelGraph;
use crate::structure::dcs::DcsResult;

/// quantiles logged by [log_result_degrees]
pub const DEFAULT_QUANTILES: [f64; 5] = [0.05, 0.25, 0.5, 0.75, 0.95];

/// returns, for each quantile asked, the degree in graph of nodes.
/// Degrees are computed in graph, so if graph is not restricted to nodes, neighbours outside of nodes are counted.
pub fn degree_quantiles<G: PeelGraph>(graph: &G, nodes: &[G::Node], quantiles: &[f64]) -> anyhow::Result<Vec<u64>> {
    //
    let mut histo = Histogram::<u64>::new(2)?;
    for n in nodes {
        let degree = graph
            .degree(*n)
            .ok_or_else(|| anyhow!("degree_quantiles node {:?} not in graph", n))?;
        histo.record(degree as u64)?;
    }
    let degrees = quantiles.iter().map(|q| histo.value_at_quantile(*q)).collect::<Vec<u64>>();
    Ok(degrees)
} // end of degree_quantiles

/// log::info degree quantiles of result nodes in each graph of result
pub fn log_result_degrees<G: PeelGraph>(result: &DcsResult<G>) -> anyhow::Result<()> {
    log::info!("quantiles used : {:?}", DEFAULT_QUANTILES);
    for (rank, graph) in result.get_graphs().iter().enumerate() {
        let degrees = degree_quantiles(graph, result.get_nodes(), &DEFAULT_QUANTILES)?;
        log::info!(" graph : {rank}, degrees : {:?} ", degrees);
    }
    Ok(())
} // end of log_result_degrees

#[cfg(test)]
mod tests {

    use super::*;
    use petgraph::graphmap::UnGraphMap;

    #[test]
    fn star_degrees() {
        // a star with center 0 and 10 leaves
        let edges: Vec<(u32, u32)> = (1..=10).map(|i| (0, i)).collect();
        let graph = UnGraphMap::<u32, ()>::from_edges(&edges);
        let nodes: Vec<u32> = (0..=10).collect();
        let degrees = degree_quantiles(&graph, &nodes, &[0.5, 1.]).unwrap();
        assert_eq!(degrees, vec![1, 10]);
        assert!(degree_quantiles(&graph, &[11], &[0.5]).is_err());
    } // end of star_degrees
} // end of mod tests

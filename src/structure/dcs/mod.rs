//!
//! module dedicated to the approximation of the densest common subgraph of a set of graphs by greedy peeling.
//!
//! The graphs are first restricted to their common nodes ([preprocess]) then the peeling ([PeelingEngine])
//! deletes nodes of minimal degree and keeps the node set of highest density.
//! For one graph the density found is at least half of the maximal density (Charikar 2000).
//!
//! Graphs are accessed only through the trait [PeelGraph](crate::graph::PeelGraph).

/// Errors
pub mod error;
pub use error::{DcsError, PassKind};

/// Peeling parameters
pub mod params;
pub use params::*;

/// Nodes sorted by minimum degree across graphs
pub mod buckets;
pub use buckets::DegreeBucketIndex;

/// Graphs sharing a node set
pub mod multiview;
pub use multiview::MultiGraphView;

/// Graph and multi graph density
pub mod density;
pub use density::{density, multi_graph_density, Density};

/// Restriction of graphs to common nodes
pub mod preprocess;
pub use preprocess::{induce_all, intersect_node_sets, preprocess};

pub mod peeling;
pub use peeling::{densest_common_subgraph, Checkpoint, DcsResult, DensityDiscovery, Outcome, PeelingEngine};

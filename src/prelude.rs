//! To ease access to most frequently items
//!

pub use crate::graph::{IdGraph, PeelGraph};

pub use crate::structure::dcs::*;

pub use crate::io::bson::{bson_dump, bson_reload, DcsBsonHeader};
pub use crate::io::csv::{load_edge_list, undirected_from_csv};
pub use crate::io::output::{dump_node_list, write_node_list, Format, Output};

pub use crate::tools::degrees::{degree_quantiles, log_result_degrees};

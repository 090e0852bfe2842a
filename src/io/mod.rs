//! io : loading of edge lists and dump of results

/// load undirected graphs from csv like edge lists
pub mod csv;

/// text dump of result
pub mod output;

/// bson dump of result
pub mod bson;

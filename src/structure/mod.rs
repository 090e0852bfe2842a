//! This module is devoted to the search of dense subgraphs.
//!
//! Algorithm implemented is greedy peeling, extended to a set of graphs sharing their nodes:
//!
//!   - Charikar _Greedy approximation algorithms for finding dense components in a graph_ [2000](https://link.springer.com/chapter/10.1007/3-540-44436-X_10)
//!
//!  See also:
//!     - _Jethava Beerenwinkel Finding dense subgraphs in relational graphs_ [2015](https://link.springer.com/chapter/10.1007/978-3-319-23525-7_39)
//!       for the densest common subgraph problem.
//!

/// densest common subgraph by greedy peeling
pub mod dcs;

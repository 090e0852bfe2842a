//! Nodes sorted by their minimal degree across graphs.
//!
//! Bucket d holds the nodes whose minimum degree across all graphs of the view is d.
//! Each bucket is an IndexSet so that insertion and deletion are O(1) and iteration order is deterministic.
//!
//! The search for the node of minimal degree scans buckets from degree 0 up to the first non empty one.
//! This is O(d_min) which is small during the peeling of sparse graphs. We do not keep a pointer on the lowest
//! non empty bucket as a neighbour of a deleted node can go back to a lower bucket.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use super::error::DcsError;
use super::multiview::MultiGraphView;
use crate::graph::PeelGraph;

type Bucket<N> = IndexSet<N, ahash::RandomState>;

/// The degree bucket table. It is owned by one peeling pass.
pub struct DegreeBucketIndex<N> {
    /// buckets[d] contains nodes with min degree d
    buckets: Vec<Bucket<N>>,
    /// total number of nodes in table
    nb_nodes: usize,
} // end of struct DegreeBucketIndex

impl<N> DegreeBucketIndex<N>
where
    N: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        DegreeBucketIndex {
            buckets: Vec::new(),
            nb_nodes: 0,
        }
    }

    /// builds the table for all nodes of view, using their minimal degree across graphs.
    pub fn from_view<G>(view: &MultiGraphView<G>) -> Result<Self, DcsError>
    where
        G: PeelGraph<Node = N>,
    {
        let mut index = DegreeBucketIndex::new();
        for node in view.nodes() {
            let degree = view.min_cross_graph_degree(node)?;
            index.insert(node, degree);
        }
        log::debug!(
            "DegreeBucketIndex::from_view nb nodes : {}, nb buckets : {}",
            index.len(),
            index.get_nb_buckets()
        );
        Ok(index)
    } // end of from_view

    /// inserts node in bucket of rank degree, growing table if necessary
    pub fn insert(&mut self, node: N, degree: usize) {
        if degree >= self.buckets.len() {
            self.buckets.resize_with(degree + 1, Bucket::<N>::default);
        }
        if self.buckets[degree].insert(node) {
            self.nb_nodes += 1;
        }
    } // end of insert

    /// removes node from bucket of rank degree. Returns false if node was not there.
    pub fn remove(&mut self, node: N, degree: usize) -> bool {
        match self.buckets.get_mut(degree) {
            Some(bucket) => {
                let removed = bucket.swap_remove(&node);
                if removed {
                    self.nb_nodes -= 1;
                }
                removed
            }
            None => false,
        }
    } // end of remove

    /// returns the first node of the first non empty bucket, with its degree.
    pub fn find_min_degree_node(&self) -> Result<(N, usize), DcsError> {
        for (degree, bucket) in self.buckets.iter().enumerate() {
            if let Some(node) = bucket.get_index(0) {
                return Ok((*node, degree));
            }
        }
        Err(DcsError::EmptyIndex)
    } // end of find_min_degree_node

    /// number of nodes in table
    pub fn len(&self) -> usize {
        self.nb_nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nb_nodes == 0
    }

    /// number of buckets, i.e max degree seen + 1
    pub fn get_nb_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// dumps non empty buckets at trace level
    pub fn dump(&self) {
        if log::log_enabled!(log::Level::Trace) {
            for (degree, bucket) in self.buckets.iter().enumerate() {
                if !bucket.is_empty() {
                    log::trace!("degree : {}, nodes : {:?}", degree, bucket);
                }
            }
        }
    } // end of dump
} // end of impl DegreeBucketIndex

impl<N> Default for DegreeBucketIndex<N>
where
    N: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        DegreeBucketIndex::new()
    }
}

//=======================================================================================

// end of mod tests

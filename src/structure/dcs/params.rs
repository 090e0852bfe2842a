//! Peeling parameters.
//!
//! During the first pass the set of remaining nodes is saved (the search space for the second pass)
//! only every `snapshot_interval` improvements of the best density.
//! A small interval gives a small search space (so a fast second pass) at the price of more copies of the node set.
//! The saved node set is a heuristic: it may not contain a node set reaching the best density,
//! this is reported in the result (see [Outcome](super::peeling::Outcome)).

/// default number of density improvements between two saves of the search space.
pub const DEFAULT_SNAPSHOT_INTERVAL: usize = 100;

#[derive(Debug, Copy, Clone)]
pub struct PeelParams {
    /// number of density improvements in first pass between two saves of the search space.
    pub snapshot_interval: usize,
} // end of PeelParams

impl PeelParams {
    /// snapshot_interval is set to 1 if 0 is given.
    pub fn new(snapshot_interval: usize) -> Self {
        PeelParams {
            snapshot_interval: snapshot_interval.max(1),
        }
    }

    //
    pub fn get_snapshot_interval(&self) -> usize {
        self.snapshot_interval
    }

    //
    pub fn set_snapshot_interval(&mut self, interval: usize) {
        self.snapshot_interval = interval.max(1)
    }
} // end of impl PeelParams

impl Default for PeelParams {
    fn default() -> Self {
        PeelParams::new(DEFAULT_SNAPSHOT_INTERVAL)
    }
}
